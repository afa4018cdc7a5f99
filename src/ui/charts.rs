//! Text charts for the dashboard: a two-slice proportion bar and a score
//! trend plot.

use crate::models::observation::Observation;
use crate::utils::colors::{GREEN, GREY, RED, RESET};
use crate::utils::formatting::{format_percent, pad_left};

const FULL: char = '█';
const EMPTY: char = '░';

/// Number of cells out of `width` given to a share of `percent`.
fn cells(percent: f64, width: usize) -> usize {
    ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize
}

/// Greed vs Fear proportion chart (one bar per slice).
pub fn proportion_chart(greed_percent: f64, fear_percent: f64, width: usize) -> String {
    let greed_cells = cells(greed_percent, width);
    let fear_cells = width.saturating_sub(greed_cells);

    let greed_bar = format!(
        "{GREEN}{}{RESET}{GREY}{}{RESET}",
        FULL.to_string().repeat(greed_cells),
        EMPTY.to_string().repeat(width - greed_cells)
    );
    let fear_bar = format!(
        "{RED}{}{RESET}{GREY}{}{RESET}",
        FULL.to_string().repeat(fear_cells),
        EMPTY.to_string().repeat(width - fear_cells)
    );

    format!(
        "  Greed {} {}\n  Fear  {} {}\n",
        greed_bar,
        pad_left(&format_percent(greed_percent), 6),
        fear_bar,
        pad_left(&format_percent(fear_percent), 6)
    )
}

/// Row index (0 = top) of `score` on a plot of `height` rows spanning
/// +1.0 (top) to -1.0 (bottom).
fn row_for(score: f64, height: usize) -> usize {
    let s = score.clamp(-1.0, 1.0);
    let pos = (1.0 - s) / 2.0 * (height - 1) as f64;
    pos.round() as usize
}

/// Mean score per column. With more points than `width`, consecutive
/// points share a column; otherwise each point gets its own.
fn column_scores(points: &[Observation], width: usize) -> Vec<f64> {
    let width = width.max(1);
    if points.len() <= width {
        return points.iter().map(|o| o.score).collect();
    }

    (0..width)
        .map(|c| {
            let bucket = &points[c * points.len() / width..(c + 1) * points.len() / width];
            bucket.iter().map(|o| o.score).sum::<f64>() / bucket.len() as f64
        })
        .collect()
}

/// Score-over-time plot of the whole history. `points` must be in
/// chronological order; long histories are averaged into `width` columns.
pub fn trend_chart(points: &[Observation], width: usize, height: usize) -> String {
    let height = height.max(3) | 1; // odd, so 0.0 has its own row
    let zero_row = row_for(0.0, height);

    if points.is_empty() {
        return format!("  {GREY}(no observations){RESET}\n");
    }

    let columns = column_scores(points, width);
    let mut grid = vec![vec![' '; columns.len()]; height];

    for cell in grid[zero_row].iter_mut() {
        *cell = '─';
    }

    for (x, score) in columns.iter().enumerate() {
        grid[row_for(*score, height)][x] = '●';
    }

    let mut out = String::new();
    for (y, row) in grid.iter().enumerate() {
        let axis = if y == 0 {
            "+1.0"
        } else if y == zero_row {
            " 0.0"
        } else if y == height - 1 {
            "-1.0"
        } else {
            "    "
        };

        let color = if y < zero_row {
            GREEN
        } else if y > zero_row {
            RED
        } else {
            GREY
        };

        let line: String = row.iter().collect();
        out.push_str(&format!("  {axis} ┤{color}{line}{RESET}\n"));
    }

    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        out.push_str(&format!(
            "         {GREY}{} → {} (UTC){RESET}\n",
            first.timestamp_str(),
            last.timestamp_str()
        ));
    }
    if columns.len() < points.len() {
        out.push_str(&format!(
            "         {GREY}{} observations averaged into {} columns{RESET}\n",
            points.len(),
            columns.len()
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::observation::parse_timestamp;
    use crate::utils::table::strip_ansi;

    fn obs(id: i64, score: f64) -> Observation {
        Observation {
            id,
            text: String::new(),
            sentiment: String::new(),
            score,
            timestamp: parse_timestamp("2025-01-01 10:00:00"),
        }
    }

    #[test]
    fn proportion_bars_split_the_width() {
        let out = strip_ansi(&proportion_chart(75.0, 25.0, 20));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].matches(FULL).count(), 15);
        assert_eq!(lines[1].matches(FULL).count(), 5);
        assert!(lines[0].ends_with("75.0%"));
        assert!(lines[1].ends_with("25.0%"));
    }

    #[test]
    fn extremes_land_on_top_and_bottom_rows() {
        assert_eq!(row_for(1.0, 11), 0);
        assert_eq!(row_for(0.0, 11), 5);
        assert_eq!(row_for(-1.0, 11), 10);
    }

    #[test]
    fn trend_plots_one_point_per_observation() {
        let points = vec![obs(1, 0.9), obs(2, -0.8), obs(3, 0.1)];
        let out = strip_ansi(&trend_chart(&points, 40, 11));
        assert_eq!(out.matches('●').count(), 3);
        assert!(out.contains("+1.0"));
        assert!(out.contains("-1.0"));
    }

    #[test]
    fn long_history_is_averaged_not_truncated() {
        // 25 greedy points then 25 fearful ones, squeezed into 10 columns
        let points: Vec<Observation> = (0..50)
            .map(|i| obs(i, if i < 25 { 0.8 } else { -0.8 }))
            .collect();
        let out = strip_ansi(&trend_chart(&points, 10, 5));

        assert_eq!(out.matches('●').count(), 10);
        let top = out.lines().next().unwrap();
        let bottom = out.lines().nth(4).unwrap();
        // oldest half is still drawn, on the greed side
        assert_eq!(top.matches('●').count(), 5);
        assert_eq!(bottom.matches('●').count(), 5);
        assert!(out.contains("50 observations averaged into 10 columns"));
    }

    #[test]
    fn column_scores_are_bucket_means() {
        let points: Vec<Observation> = [1.0, 0.0, -1.0, -0.5]
            .iter()
            .enumerate()
            .map(|(i, s)| obs(i as i64, *s))
            .collect();
        assert_eq!(column_scores(&points, 2), vec![0.5, -0.75]);
        assert_eq!(column_scores(&points, 8), vec![1.0, 0.0, -1.0, -0.5]);
    }
}
