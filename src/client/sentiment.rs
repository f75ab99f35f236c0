//! Inference API client for sentiment scoring
//!
//! POSTs text to a hosted star-rating sentiment model and returns the raw
//! JSON body for shape classification downstream.

use crate::client::SentimentModel;
use crate::config::ModelConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

/// Hosted sentiment model client
pub struct SentimentClient {
    http: Client,
    config: ModelConfig,
}

#[derive(Debug, Serialize)]
struct InferenceRequest {
    inputs: String,
}

impl SentimentClient {
    /// Create a new sentiment client
    pub fn new(config: ModelConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self { http, config })
    }
}

/// Cut a log excerpt at a char boundary at or below `max` bytes
fn truncate(body: &str, max: usize) -> &str {
    if body.len() <= max {
        return body;
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[async_trait]
impl SentimentModel for SentimentClient {
    async fn analyze(&self, text: &str) -> Result<serde_json::Value> {
        let request = InferenceRequest {
            inputs: text.to_string(),
        };

        // The token goes out verbatim even when empty
        let resp = self
            .http
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_token))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Api(format!(
                "Fake news check failed with status {}",
                status.as_u16()
            )));
        }

        let body = resp.text().await?;
        tracing::debug!("model raw response: {}", truncate(&body, 500));

        Ok(serde_json::from_str(&body)?)
    }

    fn name(&self) -> &str {
        "nlptown"
    }
}
