//! Runtime configuration.
//!
//! Everything has a default, so the crate works with no file at all as long
//! as an API key arrives from somewhere (the CLI flag or `NEWS_API_KEY`).
//! A YAML file may override any subset of keys:
//!
//! ```yaml
//! news_api:
//!   api_key: "..."
//!   country: us
//! translation:
//!   target_language: es
//! article_delay_ms: 1000
//! request_timeout_secs: 10
//! ```

use crate::models::Category;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

/// Image shown when an upstream record carries none.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1586339949916-3e9457bef6d3?w=400";

/// Top-level configuration, as read from YAML.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// NewsAPI endpoint, key and fixed query parameters.
    pub news_api: NewsApiSettings,
    /// Translation endpoint and language pair.
    pub translation: TranslationSettings,
    /// Maximum headlines kept after validation.
    pub headline_limit: usize,
    /// Only this many leading characters of a description get translated.
    pub description_excerpt_chars: usize,
    /// Pause between translated headlines.
    pub article_delay_ms: u64,
    /// Per-request timeout for every upstream call.
    pub request_timeout_secs: u64,
    /// Image link used when a record carries none.
    pub placeholder_image: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            news_api: NewsApiSettings::default(),
            translation: TranslationSettings::default(),
            headline_limit: 6,
            description_excerpt_chars: 200,
            article_delay_ms: 1000,
            request_timeout_secs: 10,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl Config {
    /// Load from a YAML file, or return defaults when no path is given.
    #[instrument(level = "info")]
    pub async fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).await?;
        let config = Self::from_yaml(&text)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse a YAML document; missing keys keep their defaults.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes to unit, not to a map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// [`Config::article_delay_ms`] as a `Duration`.
    pub fn article_delay(&self) -> Duration {
        Duration::from_millis(self.article_delay_ms)
    }

    /// [`Config::request_timeout_secs`] as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// NewsAPI endpoint and fixed query parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NewsApiSettings {
    /// API root, without a trailing endpoint name.
    pub base_url: String,
    /// Sent as `apiKey`; never logged.
    pub api_key: String,
    /// Country filter for top headlines.
    pub country: String,
    /// Records requested per call.
    pub page_size: u32,
    /// Language requested from the search endpoint.
    pub search_language: String,
}

impl Default for NewsApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org/v2".to_string(),
            api_key: String::new(),
            country: "us".to_string(),
            page_size: 10,
            search_language: "es".to_string(),
        }
    }
}

impl NewsApiSettings {
    fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        Url::parse(&format!("{}/{}", self.base_url.trim_end_matches('/'), path))
    }

    /// `GET /top-headlines?country=..&pageSize=..&category=..&apiKey=..`
    pub fn top_headlines_url(&self, category: Category) -> Result<Url, url::ParseError> {
        let mut url = self.endpoint("top-headlines")?;
        url.query_pairs_mut()
            .append_pair("country", &self.country)
            .append_pair("pageSize", &self.page_size.to_string())
            .append_pair("category", category.as_str())
            .append_pair("apiKey", &self.api_key);
        Ok(url)
    }

    /// `GET /everything?q=..&language=..&pageSize=..&apiKey=..`
    pub fn everything_url(&self, query: &str) -> Result<Url, url::ParseError> {
        let mut url = self.endpoint("everything")?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("language", &self.search_language)
            .append_pair("pageSize", &self.page_size.to_string())
            .append_pair("apiKey", &self.api_key);
        Ok(url)
    }
}

/// Translation endpoint and language pair.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslationSettings {
    /// Full URL of the translation endpoint.
    pub endpoint: String,
    /// Language of the upstream headlines.
    pub source_language: String,
    /// Language shown to readers.
    pub target_language: String,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            source_language: "en".to_string(),
            target_language: "es".to_string(),
        }
    }
}

impl TranslationSettings {
    /// Translation request for `text`, percent-encoded.
    pub fn request_url(&self, text: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("client", "gtx"),
                ("sl", self.source_language.as_str()),
                ("tl", self.target_language.as_str()),
                ("dt", "t"),
                ("q", text),
            ],
        )
    }
}
