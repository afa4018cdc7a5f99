/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Score color:
/// \>0 → green
/// \<0 → red
/// 0 → grey
pub fn color_for_score(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        GREY
    }
}

/// Delta color around the 50% midpoint: greed green, fear red.
pub fn color_for_delta(delta: f64) -> &'static str {
    if delta > 0.0 {
        GREEN
    } else if delta < 0.0 {
        RED
    } else {
        RESET
    }
}

pub fn color_for_label(label: &str) -> &'static str {
    use crate::models::sentiment::Sentiment;

    match Sentiment::from_label(label) {
        Sentiment::Positive => GREEN,
        Sentiment::Negative => RED,
        Sentiment::Neutral => GREY,
    }
}

/// Wrap `value` in `color`, leaving blank values uncolored.
pub fn paint(value: &str, color: &str) -> String {
    if value.trim().is_empty() {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
