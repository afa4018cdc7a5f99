//! Hosted inference backend.
//!
//! Sends one text per request to a text-classification endpoint and keeps
//! the highest-scoring label. Attempt-once: errors are returned to the
//! caller without retrying.

use super::{RawPrediction, SentimentModel};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Model used by the stock `sentiment-analysis` pipeline.
pub const DEFAULT_MODEL: &str = "distilbert/distilbert-base-uncased-finetuned-sst-2-english";
pub const DEFAULT_ENDPOINT: &str = "https://router.huggingface.co/hf-inference";

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// Endpoints answer either `[[{..}, {..}]]` or `[{..}, {..}]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl InferenceResponse {
    fn best(self) -> Option<LabelScore> {
        let candidates = match self {
            InferenceResponse::Nested(outer) => outer.into_iter().next().unwrap_or_default(),
            InferenceResponse::Flat(v) => v,
        };

        candidates
            .into_iter()
            .filter(|c| c.score.is_finite())
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

pub struct HuggingFaceModel {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    token: Option<String>,
}

impl std::fmt::Debug for HuggingFaceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceModel")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

impl HuggingFaceModel {
    pub fn new(
        endpoint: &str,
        model: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> AppResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::ClassifierUnavailable(format!("HTTP client init: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_owned(),
            model: model.to_owned(),
            token,
        })
    }

    /// Build from config; the API token is read from the environment
    /// variable named by `token_env`.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let token = std::env::var(&cfg.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty());

        Self::new(
            &cfg.model_endpoint,
            &cfg.model_name,
            token,
            Duration::from_secs(cfg.request_timeout_secs),
        )
    }

    pub fn url(&self) -> String {
        format!("{}/models/{}", self.endpoint, self.model)
    }
}

impl SentimentModel for HuggingFaceModel {
    fn name(&self) -> &str {
        &self.model
    }

    fn predict(&self, text: &str) -> AppResult<RawPrediction> {
        let mut req = self
            .client
            .post(self.url())
            .json(&InferenceRequest { inputs: text });

        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let response = req
            .send()
            .map_err(|e| AppError::ClassifierUnavailable(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AppError::ClassifierUnavailable(format!(
                "{} returned {}: {}",
                self.model,
                status,
                body.trim()
            )));
        }

        let parsed: InferenceResponse = response
            .json()
            .map_err(|e| AppError::ClassifierUnavailable(format!("unexpected response: {e}")))?;

        let best = parsed.best().ok_or_else(|| {
            AppError::ClassifierUnavailable(format!("{} returned no labels", self.model))
        })?;

        Ok(RawPrediction {
            label: best.label,
            confidence: best.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_highest_label_from_nested_response() {
        let body = r#"[[{"label":"NEGATIVE","score":0.02},{"label":"POSITIVE","score":0.98}]]"#;
        let parsed: InferenceResponse = serde_json::from_str(body).unwrap();
        let best = parsed.best().unwrap();
        assert_eq!(best.label, "POSITIVE");
        assert_eq!(best.score, 0.98);
    }

    #[test]
    fn accepts_flat_response() {
        let body = r#"[{"label":"NEGATIVE","score":0.7}]"#;
        let parsed: InferenceResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.best().unwrap().label, "NEGATIVE");
    }

    #[test]
    fn empty_response_has_no_best_label() {
        let parsed: InferenceResponse = serde_json::from_str("[[]]").unwrap();
        assert!(parsed.best().is_none());
    }

    #[test]
    fn unreachable_endpoint_is_unavailable() {
        let model = HuggingFaceModel::new(
            "http://127.0.0.1:9",
            DEFAULT_MODEL,
            None,
            Duration::from_secs(2),
        )
        .unwrap();

        let err = model.predict("Bitcoin hits all-time high!").unwrap_err();
        assert!(matches!(err, AppError::ClassifierUnavailable(_)));
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        let model =
            HuggingFaceModel::new("http://localhost:8080/", "acme/finbert", None, Duration::from_secs(1))
                .unwrap();
        assert_eq!(model.url(), "http://localhost:8080/models/acme/finbert");
    }
}
