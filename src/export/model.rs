// src/export/model.rs

use crate::models::observation::Observation;
use serde::Serialize;

/// Flat export row.
#[derive(Serialize, Clone, Debug)]
pub struct ObservationExport {
    pub id: i64,
    pub timestamp: String,
    pub text: String,
    pub sentiment: String,
    pub score: f64,
}

impl From<&Observation> for ObservationExport {
    fn from(o: &Observation) -> Self {
        Self {
            id: o.id,
            timestamp: o.timestamp_str(),
            text: o.text.clone(),
            sentiment: o.sentiment.clone(),
            score: o.score,
        }
    }
}
