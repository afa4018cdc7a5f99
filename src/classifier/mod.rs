//! Classifier adapter.
//!
//! Wraps a pretrained sentiment model behind [`SentimentModel`] and turns its
//! raw `(label, confidence)` output into the signed score stored with each
//! observation.

pub mod huggingface;
pub mod lexicon;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::sentiment::Sentiment;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use huggingface::HuggingFaceModel;
pub use lexicon::LexiconModel;

/// Raw model output: a free-form label and a confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPrediction {
    pub label: String,
    pub confidence: f64,
}

/// Adapter output: lower-cased label and signed score in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentiment {
    pub label: String,
    pub score: f64,
}

/// A pretrained sentiment classifier, consumed as a black box.
pub trait SentimentModel {
    /// Short human-readable identifier (model name or backend).
    fn name(&self) -> &str;

    /// Classify a single text.
    fn predict(&self, text: &str) -> AppResult<RawPrediction>;
}

/// Available model backends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierKind {
    /// Hosted inference endpoint for a pretrained transformer model
    #[default]
    Huggingface,
    /// Offline heuristic word list (tests, no network)
    Lexicon,
}

/// Build the configured model. Called once per process; the result is passed
/// by reference to every classification.
pub fn build_model(cfg: &Config) -> AppResult<Box<dyn SentimentModel>> {
    match cfg.classifier {
        ClassifierKind::Huggingface => Ok(Box::new(HuggingFaceModel::from_config(cfg)?)),
        ClassifierKind::Lexicon => Ok(Box::new(LexiconModel::new())),
    }
}

/// Map a raw prediction onto the signed score convention.
///
/// The label is lower-cased; a label containing "positive" keeps the
/// confidence, one containing "negative" negates it, anything else scores 0.
pub fn score_prediction(pred: &RawPrediction) -> AppResult<ScoredSentiment> {
    let c = pred.confidence;
    if !c.is_finite() || !(0.0..=1.0).contains(&c) {
        return Err(AppError::ClassifierUnavailable(format!(
            "model returned an invalid confidence: {}",
            c
        )));
    }

    let label = pred.label.to_lowercase();
    let score = Sentiment::from_label(&label).sign() * c;

    // -0.0 would print as "-0.00"
    let score = if score == 0.0 { 0.0 } else { score };

    Ok(ScoredSentiment { label, score })
}

/// Classify `text` and return its lower-cased label and signed score.
///
/// Any model failure surfaces as `ClassifierUnavailable`; nothing is stored
/// here.
pub fn classify_and_score(model: &dyn SentimentModel, text: &str) -> AppResult<ScoredSentiment> {
    let raw = model.predict(text).map_err(|e| match e {
        AppError::ClassifierUnavailable(_) => e,
        other => AppError::ClassifierUnavailable(other.to_string()),
    })?;

    score_prediction(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pred(label: &str, confidence: f64) -> RawPrediction {
        RawPrediction {
            label: label.to_string(),
            confidence,
        }
    }

    #[test]
    fn positive_keeps_confidence() {
        for c in [0.0, 0.25, 0.5, 0.95, 1.0] {
            let s = score_prediction(&pred("POSITIVE", c)).unwrap();
            assert_eq!(s.label, "positive");
            assert_eq!(s.score, c);
        }
    }

    #[test]
    fn negative_negates_confidence() {
        for c in [0.1, 0.8, 1.0] {
            let s = score_prediction(&pred("NEGATIVE", c)).unwrap();
            assert_eq!(s.label, "negative");
            assert_eq!(s.score, -c);
        }
    }

    #[test]
    fn other_labels_score_zero() {
        for label in ["NEUTRAL", "LABEL_2", "mixed", ""] {
            let s = score_prediction(&pred(label, 0.9)).unwrap();
            assert_eq!(s.score, 0.0);
            assert!(s.score.is_sign_positive());
        }
    }

    #[test]
    fn out_of_range_confidence_is_rejected() {
        for c in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = score_prediction(&pred("POSITIVE", c)).unwrap_err();
            assert!(matches!(err, AppError::ClassifierUnavailable(_)));
        }
    }
}
