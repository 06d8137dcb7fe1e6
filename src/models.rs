//! Data models for upstream news records and their display-ready form.
//!
//! This module defines the core data structures used throughout the crate:
//! - [`RawApiArticle`]: an untrusted record as returned by NewsAPI
//! - [`ValidArticle`]: a record that passed [`crate::validate`]
//! - [`Article`]: the immutable, display-ready value handed to renderers
//! - [`Category`]: the headline categories NewsAPI understands
//!
//! Wire names stay camelCase (`urlToImage`) to match the NewsAPI schema.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A news record exactly as NewsAPI sent it.
///
/// Every field is optional. A field holding anything other than a JSON
/// string (null, a number, an object) decodes to `None`, so decoding a record
/// never fails on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawApiArticle {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url_to_image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

/// A record that passed validation.
///
/// Only [`crate::validate::validate`] builds one, so holding a `ValidArticle`
/// means the title and description are present, long enough and not the
/// upstream "removed" marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidArticle {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    pub content: Option<String>,
}

/// A display-ready article.
///
/// Articles are plain values: built once by a fetcher, never mutated, and
/// identified only by their position in the returned list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline text, never empty.
    pub title: String,
    /// Summary text, never empty.
    pub description: String,
    /// Link to the source story. Empty when the upstream record had none.
    pub url: String,
    /// Image link, the configured placeholder when the upstream had none.
    pub url_to_image: String,
    /// Body text, or a description fallback.
    pub content: String,
}

impl Article {
    /// Text the detail view shows as the body.
    pub fn body(&self) -> &str {
        if self.content.trim().is_empty() {
            &self.description
        } else {
            &self.content
        }
    }
}

/// Headline categories accepted by the `top-headlines` endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Category {
    #[default]
    General,
    Technology,
    Sports,
    Health,
    Business,
    Science,
    Entertainment,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Technology,
        Category::Sports,
        Category::Health,
        Category::Business,
        Category::Science,
        Category::Entertainment,
    ];

    /// Identifier sent to NewsAPI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Technology => "technology",
            Category::Sports => "sports",
            Category::Health => "health",
            Category::Business => "business",
            Category::Science => "science",
            Category::Entertainment => "entertainment",
        }
    }

    /// Spanish label shown to readers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Technology => "Tecnología",
            Category::Sports => "Deportes",
            Category::Health => "Salud",
            Category::Business => "Negocios",
            Category::Science => "Ciencia",
            Category::Entertainment => "Entretenimiento",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category name NewsAPI does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
