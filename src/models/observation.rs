use super::sentiment::Sentiment;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

/// Format used by SQLite `CURRENT_TIMESTAMP` (UTC).
pub const DB_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Observation {
    pub id: i64,
    pub text: String,      // ⇔ sentiments.text (raw input, unmodified)
    pub sentiment: String, // ⇔ sentiments.sentiment (lower-cased label)
    pub score: f64,        // ⇔ sentiments.score (signed confidence)
    pub timestamp: Option<NaiveDateTime>, // ⇔ sentiments.timestamp (UTC, set by SQLite; None when NULL or unreadable)
}

impl Observation {
    pub fn class(&self) -> Sentiment {
        Sentiment::from_label(&self.sentiment)
    }

    /// Empty when the row carries no readable timestamp.
    pub fn timestamp_str(&self) -> String {
        self.timestamp
            .map(|ts| ts.format(DB_TIMESTAMP_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// True when the stored score sign agrees with the stored label.
    ///
    /// The bootstrap row "I'm neutral about stocks today" (neutral, 0.1)
    /// does not, and is kept as-is.
    pub fn is_consistent(&self) -> bool {
        match self.class() {
            Sentiment::Positive => self.score > 0.0,
            Sentiment::Negative => self.score < 0.0,
            Sentiment::Neutral => self.score == 0.0,
        }
    }
}

/// Parse a timestamp as written by SQLite (`CURRENT_TIMESTAMP`, optionally
/// with fractional seconds) or by other writers using RFC 3339.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(ts);
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).naive_utc())
}
