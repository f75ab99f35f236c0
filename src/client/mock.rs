//! Mock clients for testing
//!
//! Canned implementations of both upstream traits so tests run without
//! network calls.

use crate::client::{HeadlineSource, SentimentModel};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use serde_json::Value;

/// Mock headline source with canned results
pub struct MockHeadlineSource {
    headlines: Vec<String>,
    simulate_failures: bool,
}

impl MockHeadlineSource {
    pub fn new() -> Self {
        Self {
            headlines: Self::default_headlines(),
            simulate_failures: false,
        }
    }

    pub fn with_headlines(mut self, headlines: Vec<String>) -> Self {
        self.headlines = headlines;
        self
    }

    pub fn with_failures(mut self) -> Self {
        self.simulate_failures = true;
        self
    }

    fn default_headlines() -> Vec<String> {
        vec![
            "Scientists confirm breakthrough in battery density".to_string(),
            "Miracle cure doctors don't want you to know about".to_string(),
            "Markets steady as rate decision looms".to_string(),
        ]
    }
}

impl Default for MockHeadlineSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HeadlineSource for MockHeadlineSource {
    async fn headlines(&self, _keyword: &str) -> Result<Vec<String>> {
        if self.simulate_failures {
            return Err(AppError::Api("Mock failure".into()));
        }
        Ok(self.headlines.clone())
    }

    fn name(&self) -> &str {
        "MockNews"
    }
}

/// Mock sentiment model returning a canned response body
pub struct MockSentimentModel {
    body: Value,
    simulate_failures: bool,
}

impl MockSentimentModel {
    pub fn new() -> Self {
        Self {
            body: serde_json::json!([[{ "label": "4 stars", "score": 0.71 }]]),
            simulate_failures: false,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    pub fn with_failures(mut self) -> Self {
        self.simulate_failures = true;
        self
    }
}

impl Default for MockSentimentModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentModel for MockSentimentModel {
    async fn analyze(&self, _text: &str) -> Result<Value> {
        if self.simulate_failures {
            return Err(AppError::Api("Mock failure".into()));
        }
        Ok(self.body.clone())
    }

    fn name(&self) -> &str {
        "MockModel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_headlines() {
        let source = MockHeadlineSource::new().with_headlines(vec!["one".into()]);
        assert_eq!(source.headlines("any").await.unwrap(), vec!["one".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_failure_simulation() {
        let source = MockHeadlineSource::new().with_failures();
        assert!(source.headlines("any").await.is_err());

        let model = MockSentimentModel::new().with_failures();
        assert!(model.analyze("text").await.is_err());
    }
}
