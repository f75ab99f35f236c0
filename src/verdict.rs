//! Verdict classification core
//!
//! Turns a sentiment model's raw JSON body into a star rating and a star
//! rating into a veracity verdict. Shape classification and threshold
//! mapping are pure functions, kept separate from the HTTP layer.

use crate::client::SentimentModel;
use crate::error::Result;
use serde_json::Value;
use std::fmt;

/// Classified shape of a successful model response body
#[derive(Debug, Clone, PartialEq)]
pub enum ModelResponse {
    /// Nested prediction array with a star-digit label
    Predictions { label: String, stars: u8 },
    /// Body carrying an `error` field, typically while the model loads
    ModelError(String),
    /// Any other body
    Other,
}

impl ModelResponse {
    /// Classify a response body. The prediction shape is checked first:
    /// an array whose first element is an array whose first element is an
    /// object with a string `label` starting with an ASCII digit. Only
    /// when that fails is the `error` field considered, then the
    /// catch-all.
    pub fn classify(body: &Value) -> Self {
        if let Some(prediction) = body.get(0).and_then(|inner| inner.get(0)) {
            if let Some(label) = prediction.get("label").and_then(Value::as_str) {
                if let Some(stars) = label.chars().next().and_then(|c| c.to_digit(10)) {
                    return Self::Predictions {
                        label: label.to_string(),
                        stars: stars as u8,
                    };
                }
            }
        }

        if let Some(error) = body.get("error") {
            let text = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Self::ModelError(text);
        }

        Self::Other
    }
}

/// Veracity verdict for a piece of text
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Fake(String),
    Uncertain(String),
    Real(String),
    ModelNotReady(String),
    Unrecognized,
}

impl Verdict {
    /// Map a star rating to a verdict, keeping the label for display
    pub fn from_stars(stars: u8, label: String) -> Self {
        if stars <= 2 {
            Self::Fake(label)
        } else if stars == 3 {
            Self::Uncertain(label)
        } else {
            Self::Real(label)
        }
    }

    /// Fold a classified response into a verdict
    pub fn from_response(response: ModelResponse) -> Self {
        match response {
            ModelResponse::Predictions { label, stars } => Self::from_stars(stars, label),
            ModelResponse::ModelError(error) => Self::ModelNotReady(error),
            ModelResponse::Other => Self::Unrecognized,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fake(label) => write!(f, "Possibly FAKE ({})", label),
            Self::Uncertain(label) => write!(f, "Uncertain ({})", label),
            Self::Real(label) => write!(f, "Likely REAL ({})", label),
            Self::ModelNotReady(error) => write!(f, "Model not ready: {}", error),
            Self::Unrecognized => write!(f, "Unexpected response format."),
        }
    }
}

/// Drives a sentiment model and folds its responses into verdicts
pub struct FakeNewsDetector<M: SentimentModel> {
    model: M,
}

impl<M: SentimentModel> FakeNewsDetector<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Classify a piece of text. Upstream failures propagate as errors
    /// and never produce a verdict.
    pub async fn check(&self, text: &str) -> Result<Verdict> {
        let body = self.model.analyze(text).await?;
        let response = ModelResponse::classify(&body);
        tracing::debug!("{} response classified as {:?}", self.model.name(), response);
        Ok(Verdict::from_response(response))
    }
}
