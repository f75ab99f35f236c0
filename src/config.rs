//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub news: NewsConfig,
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// Headline search endpoint
    pub api_url: String,
    /// Key sent as the `apiKey` query parameter (may be empty)
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Sentiment model inference endpoint
    pub api_url: String,
    /// Bearer token, forwarded verbatim even when empty
    pub api_token: String,
}

impl Config {
    /// Load configuration from an explicit file path
    pub fn load(path: &str) -> anyhow::Result<Self> {
        Self::build(Some(path))
    }

    /// Load from default locations, falling back to built-in defaults
    pub fn load_default() -> anyhow::Result<Self> {
        let paths = ["config.toml", "~/.config/news-verdict/config.toml"];

        for path in paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::build(Some(expanded.as_ref()));
            }
        }

        Self::build(None)
    }

    fn build(path: Option<&str>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("NEWSVERDICT").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        Ok(config)
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_url: "https://newsapi.org/v2/everything".to_string(),
            api_key: String::new(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api-inference.huggingface.co/models/nlptown/bert-base-multilingual-uncased-sentiment"
                .to_string(),
            api_token: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_live_endpoints_with_empty_credentials() {
        let config = Config::default();
        assert!(config.news.api_url.contains("newsapi.org"));
        assert!(config.model.api_url.contains("nlptown"));
        assert!(config.news.api_key.is_empty());
        assert!(config.model.api_token.is_empty());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let rendered = toml::to_string(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.news.api_url, Config::default().news.api_url);
        assert_eq!(parsed.model.api_url, Config::default().model.api_url);
    }

    #[test]
    fn file_values_overlay_defaults() {
        let path = std::env::temp_dir().join("news_verdict_config_overlay.toml");
        std::fs::write(&path, "[news]\napi_key = \"k-from-file\"\n").unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.news.api_key, "k-from-file");
        // Keys the file does not set keep their defaults
        assert_eq!(config.news.api_url, NewsConfig::default().api_url);
        assert_eq!(config.model.api_url, ModelConfig::default().api_url);

        std::fs::remove_file(&path).ok();
    }
}
