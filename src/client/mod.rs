//! Upstream API clients
//!
//! This module provides the two external interfaces the tool depends on:
//! - News API: keyword search over recent headlines
//! - Inference API: sentiment scoring for a selected headline

mod news;
mod sentiment;

#[cfg(test)]
pub mod mock;

pub use news::NewsClient;
pub use sentiment::SentimentClient;

use crate::error::Result;
use async_trait::async_trait;

/// Source of headlines for a search keyword
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Fetch headlines matching the keyword, preserving upstream order.
    /// Zero matches is an empty list, not an error.
    async fn headlines(&self, keyword: &str) -> Result<Vec<String>>;

    /// Source name for logging
    fn name(&self) -> &str;
}

/// Sentiment model returning the raw response body as JSON
#[async_trait]
pub trait SentimentModel: Send + Sync {
    /// Score the text and return the parsed response body
    async fn analyze(&self, text: &str) -> Result<serde_json::Value>;

    /// Model name for logging
    fn name(&self) -> &str;
}
