//! NewsAPI fetchers producing display-ready [`Article`](crate::models::Article) lists.
//!
//! | Fetcher | Endpoint | Cap | Translation |
//! |---------|----------|-----|-------------|
//! | [`headlines::HeadlineFetcher`] | `/top-headlines` | `headline_limit` (6) | title + description excerpt |
//! | [`search::SearchFetcher`] | `/everything` | page size (10) | none, requested in the target language |
//!
//! Both share the same contract at their public boundary: they return an
//! [`Outcome`](crate::error::Outcome) and never an error. A failed list
//! request gives an empty, degraded result. Records failing
//! [`crate::validate`] are dropped without being counted as a failure.

pub mod headlines;
pub mod search;

use crate::api::HttpGet;
use crate::error::FetchError;
use crate::models::RawApiArticle;
use serde_json::Value;
use tracing::{debug, info, instrument};
use url::Url;

/// GET a NewsAPI list endpoint and decode its `articles` array.
///
/// A body without `articles` (or with `articles: null`) is an empty list, not
/// an error. Entries that are not JSON objects are skipped.
#[instrument(level = "info", skip_all)]
pub(crate) async fn fetch_raw_articles<H: HttpGet>(
    http: &H,
    url: &Url,
) -> Result<Vec<RawApiArticle>, FetchError> {
    let body = http.get_json(url).await?;
    let raw = decode_articles(body)?;
    info!(count = raw.len(), "Fetched raw articles");
    Ok(raw)
}

fn decode_articles(mut body: Value) -> Result<Vec<RawApiArticle>, FetchError> {
    let entries = match body.get_mut("articles").map(Value::take) {
        None | Some(Value::Null) => {
            debug!("Response carried no article list");
            return Ok(Vec::new());
        }
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(FetchError::Shape("`articles` is not an array")),
    };
    Ok(entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    /// A NewsAPI record that passes validation.
    pub fn valid(n: usize) -> Value {
        json!({
            "source": {"id": null, "name": "Wire"},
            "title": format!("Headline number {n} is long enough"),
            "description": format!("Description number {n} is long enough"),
            "url": format!("https://example.com/{n}"),
            "urlToImage": format!("https://example.com/{n}.png"),
            "content": format!("Content {n}")
        })
    }

    pub fn removed() -> Value {
        json!({
            "title": "[Removed]",
            "description": "[Removed] but long enough to pass",
            "url": "https://removed.com",
            "urlToImage": null,
            "content": "[Removed]"
        })
    }

    pub fn short_title() -> Value {
        json!({
            "title": "0123456789",
            "description": "A description that is long enough",
            "url": "https://example.com/short",
            "urlToImage": null,
            "content": null
        })
    }

    pub fn listing(articles: Vec<Value>) -> Value {
        json!({"status": "ok", "totalResults": articles.len(), "articles": articles})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_articles_is_empty() {
        assert!(decode_articles(json!({"status": "error", "code": "apiKeyInvalid"}))
            .unwrap()
            .is_empty());
        assert!(decode_articles(json!({"articles": null})).unwrap().is_empty());
    }

    #[test]
    fn test_non_array_articles_is_shape_error() {
        assert!(matches!(
            decode_articles(json!({"articles": "nope"})),
            Err(FetchError::Shape(_))
        ));
    }

    #[test]
    fn test_skips_non_object_entries() {
        let body = json!({"articles": [null, 3, fixtures::valid(1), "x", fixtures::removed()]});
        let raw = decode_articles(body).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].title.as_deref(), Some("Headline number 1 is long enough"));
        assert_eq!(raw[1].title.as_deref(), Some("[Removed]"));
    }
}
