//! News API client for headline search

use crate::client::HeadlineSource;
use crate::config::NewsConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// News API client for keyword search
pub struct NewsClient {
    http: Client,
    config: NewsConfig,
}

#[derive(Debug, Deserialize)]
struct NewsResponse {
    // Missing key means zero results, same as an empty array
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: String,
}

impl NewsClient {
    /// Create a new news client
    pub fn new(config: NewsConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self { http, config })
    }
}

#[async_trait]
impl HeadlineSource for NewsClient {
    async fn headlines(&self, keyword: &str) -> Result<Vec<String>> {
        let resp = self
            .http
            .get(&self.config.api_url)
            .query(&[("q", keyword), ("apiKey", self.config.api_key.as_str())])
            .send()
            .await?;

        if !resp.status().is_success() {
            tracing::warn!("news request failed with status {}", resp.status());
            return Err(AppError::Api(
                "Failed to fetch news, check API key or internet connection".to_string(),
            ));
        }

        let body: NewsResponse = resp.json().await?;
        Ok(body.articles.into_iter().map(|a| a.title).collect())
    }

    fn name(&self) -> &str {
        "NewsAPI"
    }
}
