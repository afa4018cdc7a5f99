//! Offline heuristic model for tests and no-network use.
//!
//! Not a pretrained classifier: a small hand-picked table of financial terms
//! with made-up weights and a two-token negation window. Good enough to give
//! headlines a plausible sign; do not expect model-grade accuracy.
//!
//! Emits the same label vocabulary as the hosted model
//! (`POSITIVE` / `NEGATIVE`, plus `NEUTRAL` when nothing matched) so the
//! adapter treats both backends identically.

use super::{RawPrediction, SentimentModel};
use crate::errors::AppResult;
use std::collections::HashMap;

const POSITIVE_TERMS: &[(&str, f64)] = &[
    ("all time high", 0.9),
    ("to the moon", 0.9),
    ("bullish", 0.8),
    ("booming", 0.8),
    ("boom", 0.7),
    ("soar", 0.8),
    ("soars", 0.8),
    ("surge", 0.7),
    ("surges", 0.7),
    ("rally", 0.7),
    ("rallies", 0.7),
    ("record", 0.6),
    ("beat", 0.6),
    ("beats", 0.6),
    ("upgrade", 0.6),
    ("profit", 0.6),
    ("growth", 0.6),
    ("breakout", 0.6),
    ("optimistic", 0.6),
    ("outperform", 0.7),
    ("gain", 0.5),
    ("gains", 0.5),
    ("rise", 0.5),
    ("rises", 0.5),
    ("rebound", 0.5),
    ("recovery", 0.5),
    ("strong", 0.5),
    ("buy", 0.5),
    ("high", 0.4),
    ("up", 0.3),
];

const NEGATIVE_TERMS: &[(&str, f64)] = &[
    ("sell off", -0.8),
    ("rug pull", -0.9),
    ("crash", -0.9),
    ("crashes", -0.9),
    ("collapse", -0.9),
    ("bankrupt", -0.9),
    ("bankruptcy", -0.9),
    ("plunge", -0.8),
    ("plunges", -0.8),
    ("bearish", -0.8),
    ("panic", -0.8),
    ("fraud", -0.8),
    ("recession", -0.7),
    ("downgrade", -0.6),
    ("drop", -0.6),
    ("drops", -0.6),
    ("decline", -0.6),
    ("loss", -0.6),
    ("losses", -0.6),
    ("fear", -0.6),
    ("fall", -0.5),
    ("falls", -0.5),
    ("weak", -0.5),
    ("sell", -0.5),
    ("worry", -0.5),
    ("risk", -0.4),
    ("down", -0.4),
    ("low", -0.4),
    ("volatile", -0.3),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "without", "isn't", "isnt", "won't", "wont"];

/// Number of following tokens a negation applies to.
const NEGATION_WINDOW: usize = 2;

pub struct LexiconModel {
    terms: HashMap<String, f64>,
    max_phrase_len: usize,
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconModel {
    pub fn new() -> Self {
        let terms: HashMap<String, f64> = POSITIVE_TERMS
            .iter()
            .chain(NEGATIVE_TERMS.iter())
            .map(|(t, w)| (t.to_string(), *w))
            .collect();

        let max_phrase_len = terms
            .keys()
            .map(|k| k.split(' ').count())
            .max()
            .unwrap_or(1);

        Self {
            terms,
            max_phrase_len,
        }
    }

    fn tokens(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Sum of matched term weights, longest phrase first.
    pub fn raw_score(&self, text: &str) -> f64 {
        let tokens = Self::tokens(text);
        let mut total = 0.0;
        let mut negate_left = 0usize;
        let mut i = 0;

        while i < tokens.len() {
            if NEGATIONS.contains(&tokens[i].as_str()) {
                negate_left = NEGATION_WINDOW;
                i += 1;
                continue;
            }

            let mut matched = None;
            for n in (1..=self.max_phrase_len.min(tokens.len() - i)).rev() {
                let phrase = tokens[i..i + n].join(" ");
                if let Some(w) = self.terms.get(&phrase) {
                    matched = Some((n, *w));
                    break;
                }
            }

            match matched {
                Some((n, w)) => {
                    total += if negate_left > 0 { -w } else { w };
                    negate_left = 0;
                    i += n;
                }
                None => {
                    negate_left = negate_left.saturating_sub(1);
                    i += 1;
                }
            }
        }

        total
    }
}

impl SentimentModel for LexiconModel {
    fn name(&self) -> &str {
        "lexicon (heuristic)"
    }

    fn predict(&self, text: &str) -> AppResult<RawPrediction> {
        let s = self.raw_score(text);

        let label = if s > 0.0 {
            "POSITIVE"
        } else if s < 0.0 {
            "NEGATIVE"
        } else {
            "NEUTRAL"
        };

        // Saturates towards 1.0 as matched weight accumulates.
        let confidence = if s == 0.0 {
            0.5
        } else {
            0.5 + 0.5 * s.abs().tanh()
        };

        Ok(RawPrediction {
            label: label.to_string(),
            confidence: (confidence * 10_000.0).round() / 10_000.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_seed_headlines() {
        let m = LexiconModel::new();
        assert_eq!(m.predict("Market is booming!").unwrap().label, "POSITIVE");
        assert_eq!(m.predict("Crypto crash incoming").unwrap().label, "NEGATIVE");
        assert_eq!(
            m.predict("I'm neutral about stocks today").unwrap().label,
            "NEUTRAL"
        );
    }

    #[test]
    fn reports_itself_as_heuristic() {
        assert_eq!(LexiconModel::new().name(), "lexicon (heuristic)");
    }

    #[test]
    fn phrase_is_counted_once() {
        let m = LexiconModel::new();
        assert_eq!(m.raw_score("Bitcoin hits all-time high!"), 0.9);
    }

    #[test]
    fn negation_flips_the_next_term() {
        let m = LexiconModel::new();
        assert!(m.raw_score("This is not a crash") > 0.0);
        assert!(m.raw_score("Earnings did not beat estimates") < 0.0);
    }

    #[test]
    fn confidence_stays_in_unit_interval() {
        let m = LexiconModel::new();
        let p = m
            .predict("rally surge soar record gains bullish breakout boom")
            .unwrap();
        assert!(p.confidence > 0.5 && p.confidence <= 1.0);
    }
}
