use crate::classifier::{SentimentModel, classify_and_score};
use crate::db::log::audit;
use crate::db::queries::insert_observation;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::format_score;
use rusqlite::Connection;

pub const SUCCESS_MESSAGE: &str = "Sentiment analyzed and added to database!";

/// Outcome of a stored classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: i64,
    pub label: String,
    pub score: f64,
}

pub struct AnalyzeLogic;

impl AnalyzeLogic {
    /// Classify `text` and store the result.
    ///
    /// Blank input is ignored (`Ok(None)`): nothing is classified or stored.
    /// A classifier failure returns before any insert is attempted.
    pub fn submit(
        conn: &Connection,
        model: &dyn SentimentModel,
        text: &str,
    ) -> AppResult<Option<Submission>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let scored = classify_and_score(model, text)?;
        let id = insert_observation(conn, text, &scored.label, scored.score)?;

        audit(
            conn,
            "analyze",
            &format!("{} {}", scored.label, format_score(scored.score)),
            text,
        );

        Ok(Some(Submission {
            id,
            label: scored.label,
            score: scored.score,
        }))
    }

    /// `submit` plus the user-facing status line.
    pub fn submit_and_report(
        conn: &Connection,
        model: &dyn SentimentModel,
        text: &str,
    ) -> AppResult<Option<Submission>> {
        let submission = Self::submit(conn, model, text)?;

        match &submission {
            Some(s) => {
                success(SUCCESS_MESSAGE);
                info(format!(
                    "#{} classified as {} ({}) by {}",
                    s.id,
                    s.label,
                    format_score(s.score),
                    model.name()
                ));
            }
            None => warning("Nothing to analyze: the text is empty."),
        }

        Ok(submission)
    }
}
