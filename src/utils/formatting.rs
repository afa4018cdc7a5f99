//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// `55.6%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// `+5.6%` / `-5.6%`
pub fn format_delta(value: f64) -> String {
    format!("{:+.1}%", value)
}

/// Scores are shown with two decimals and an explicit sign.
pub fn format_score(value: f64) -> String {
    if value == 0.0 {
        "0.00".to_string()
    } else {
        format!("{:+.2}", value)
    }
}

/// Display width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Fit `text` on one line of `width` columns, ending with `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if display_width(&single_line) <= width {
        return single_line;
    }

    let lines = textwrap::wrap(&single_line, width.saturating_sub(1).max(1));
    let mut first = lines
        .first()
        .map(|l| l.to_string())
        .unwrap_or_default();

    // wrap() only breaks words longer than the line when forced to
    while display_width(&first) > width.saturating_sub(1) {
        first.pop();
    }
    first.push('…');
    first
}

/// Pad with spaces to `width` display columns (no-op when already wider).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_formats_match_dashboard() {
        assert_eq!(format_percent(55.5555), "55.6%");
        assert_eq!(format_delta(5.5555), "+5.6%");
        assert_eq!(format_delta(-5.5555), "-5.6%");
        assert_eq!(format_score(-0.8), "-0.80");
        assert_eq!(format_score(0.0), "0.00");
    }

    #[test]
    fn truncate_respects_width() {
        assert_eq!(truncate("Market is booming!", 40), "Market is booming!");
        let t = truncate("I'm neutral about stocks today", 15);
        assert!(t.ends_with('…'));
        assert!(display_width(&t) <= 15);
        let long = truncate("Supercalifragilisticexpialidocious", 10);
        assert!(display_width(&long) <= 10);
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(display_width(&pad_right("📈", 4)), 4);
        assert_eq!(pad_left("7", 3), "  7");
    }
}
