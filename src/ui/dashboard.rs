//! Full-page dashboard rendering.

use crate::core::aggregator::chronological;
use crate::models::index::GreedFearIndex;
use crate::models::observation::Observation;
use crate::ui::charts::{proportion_chart, trend_chart};
use crate::utils::colors::{BOLD, GREY, RESET, color_for_delta, color_for_label, color_for_score, paint};
use crate::utils::formatting::{format_delta, format_percent, format_score, truncate};
use crate::utils::table::{Column, Table};

pub const TITLE: &str = "📈 Greed & Fear Sentiment Dashboard";
pub const SUBTITLE: &str =
    "This dashboard analyzes recent financial sentiment to compute a Greed & Fear index.";

const BAR_WIDTH: usize = 40;
const TREND_WIDTH: usize = 60;
const TREND_HEIGHT: usize = 11;
const TEXT_WIDTH: usize = 44;

/// `Greed Index  55.6%  +5.6%`
pub fn render_metric(index: &GreedFearIndex) -> String {
    let delta = index.delta();
    format!(
        "{BOLD}Greed Index{RESET}  {BOLD}{}{RESET}  {}\n",
        format_percent(index.greed_percent),
        paint(&format_delta(delta), color_for_delta(delta))
    )
}

/// Observations as a `timestamp | text | sentiment | score` table.
pub fn render_table(observations: &[Observation]) -> String {
    let mut table = Table::new(vec![
        Column::new("timestamp", 19),
        Column::new("text", TEXT_WIDTH),
        Column::new("sentiment", 9),
        Column::new("score", 6),
    ]);

    for o in observations {
        table.add_row(vec![
            o.timestamp_str(),
            truncate(&o.text, TEXT_WIDTH),
            paint(&o.sentiment, color_for_label(&o.sentiment)),
            paint(&format_score(o.score), color_for_score(o.score)),
        ]);
    }

    table.render()
}

/// `observations` newest first, as returned by the store.
pub fn render_dashboard(
    observations: &[Observation],
    index: &GreedFearIndex,
    recent_rows: usize,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("{BOLD}{TITLE}{RESET}\n"));
    out.push_str(&format!("{GREY}{SUBTITLE}{RESET}\n\n"));

    out.push_str(&render_metric(index));
    out.push('\n');

    out.push_str(&format!("{BOLD}Greed vs Fear{RESET}\n"));
    out.push_str(&proportion_chart(
        index.greed_percent,
        index.fear_percent,
        BAR_WIDTH,
    ));
    out.push('\n');

    out.push_str(&format!("{BOLD}Sentiment Scores Over Time{RESET}\n"));
    out.push_str(&trend_chart(
        &chronological(observations),
        TREND_WIDTH,
        TREND_HEIGHT,
    ));
    out.push('\n');

    out.push_str(&format!("{BOLD}Recent Sentiments{RESET}\n"));
    let recent = &observations[..observations.len().min(recent_rows)];
    out.push_str(&render_table(recent));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregator::compute_index;
    use crate::models::observation::parse_timestamp;
    use crate::utils::table::strip_ansi;

    fn rows(n: i64) -> Vec<Observation> {
        (1..=n)
            .rev()
            .map(|id| Observation {
                id,
                text: format!("headline number {id}"),
                sentiment: "positive".into(),
                score: 0.5,
                timestamp: parse_timestamp(&format!("2025-01-01 10:{:02}:00", id)),
            })
            .collect()
    }

    #[test]
    fn metric_shows_percent_and_signed_delta() {
        let idx = GreedFearIndex {
            greed: 1.0,
            fear: 0.8,
            greed_percent: 1.0 / 1.8 * 100.0,
            fear_percent: 100.0 - 1.0 / 1.8 * 100.0,
        };
        let out = strip_ansi(&render_metric(&idx));
        assert_eq!(out.trim_end(), "Greed Index  55.6%  +5.6%");
    }

    #[test]
    fn recent_table_is_capped() {
        let obs = rows(15);
        let out = strip_ansi(&render_dashboard(&obs, &compute_index(&obs), 10));
        assert_eq!(out.lines().filter(|l| l.contains("headline number")).count(), 10);
        assert!(out.contains("headline number 15 "));
        assert!(out.contains("headline number 6 "));
        assert!(!out.contains("headline number 5 "));
        assert!(out.contains(TITLE));
        assert!(out.contains("Recent Sentiments"));
    }
}
