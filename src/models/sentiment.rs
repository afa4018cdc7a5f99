use serde::Serialize;

/// Coarse sentiment class derived from a stored (lower-cased) label.
///
/// The label column is free-form: the model may emit labels such as
/// `"label_1"` or `"very positive"`. Classification follows the same
/// substring rule used to sign the score.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn from_label(label: &str) -> Self {
        let l = label.to_lowercase();
        if l.contains("positive") {
            Sentiment::Positive
        } else if l.contains("negative") {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Sign applied to the model confidence.
    pub fn sign(&self) -> f64 {
        match self {
            Sentiment::Positive => 1.0,
            Sentiment::Negative => -1.0,
            Sentiment::Neutral => 0.0,
        }
    }
}
