//! Free-text search through the `/everything` endpoint.
//!
//! Results are requested directly in the display language, so nothing is
//! translated here. Every valid record up to the page size is returned.

use crate::api::HttpGet;
use crate::config::{Config, NewsApiSettings};
use crate::error::{FetchError, Outcome};
use crate::fetchers::fetch_raw_articles;
use crate::models::{Article, RawApiArticle, ValidArticle};
use crate::utils::{image_or_placeholder, non_blank, truncate_for_log};
use crate::validate::validate;
use tracing::{error, info, instrument};

/// Fetches free-text search results.
///
/// Results are capped by the page size only; nothing is translated.
#[derive(Debug, Clone)]
pub struct SearchFetcher<H> {
    http: H,
    news_api: NewsApiSettings,
    placeholder_image: String,
}

impl<H: HttpGet> SearchFetcher<H> {
    /// Build a fetcher over `http`, taking endpoint settings and the
    /// placeholder image from `config`.
    pub fn new(http: H, config: &Config) -> Self {
        Self {
            http,
            news_api: config.news_api.clone(),
            placeholder_image: config.placeholder_image.clone(),
        }
    }

    /// Display-ready search results for `query`, at most one page.
    ///
    /// # Arguments
    ///
    /// * `query` - Free text, sent as `q`
    ///
    /// # Returns
    ///
    /// Every valid record of the first page. Never fails; a failed request
    /// gives an empty, degraded outcome.
    #[instrument(level = "info", skip_all, fields(query = %truncate_for_log(query, 60)))]
    pub async fn fetch(&self, query: &str) -> Outcome<Vec<Article>> {
        let raw = match self.request(query).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "Search request failed; returning no articles");
                return Outcome::degraded(Vec::new(), e.to_string());
            }
        };

        let fetched = raw.len();
        let articles: Vec<Article> = raw
            .into_iter()
            .filter_map(validate)
            .map(|valid| self.to_article(valid))
            .collect();
        info!(fetched, count = articles.len(), "Search results ready");
        Outcome::Complete(articles)
    }

    async fn request(&self, query: &str) -> Result<Vec<RawApiArticle>, FetchError> {
        let url = self.news_api.everything_url(query)?;
        fetch_raw_articles(&self.http, &url).await
    }

    fn to_article(&self, valid: ValidArticle) -> Article {
        let url_to_image =
            image_or_placeholder(valid.url_to_image.as_deref(), &self.placeholder_image);
        let content = non_blank(valid.content.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| valid.description.clone());
        Article {
            title: valid.title,
            description: valid.description,
            url: valid.url.unwrap_or_default(),
            url_to_image,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::stub::{Reply, StubTransport};
    use crate::config::PLACEHOLDER_IMAGE;
    use crate::fetchers::fixtures::{listing, removed, short_title, valid};
    use serde_json::json;

    fn fetcher(stub: &StubTransport) -> SearchFetcher<StubTransport> {
        SearchFetcher::new(stub.clone(), &Config::default())
    }

    #[tokio::test]
    async fn test_returns_all_valid_results_untranslated() {
        let stub = StubTransport::new()
            .route("/everything", Reply::Json(listing((0..10).map(valid).collect())));

        let out = fetcher(&stub).fetch("elecciones").await;
        assert!(!out.is_degraded());
        let articles = out.into_data();
        assert_eq!(articles.len(), 10);
        assert_eq!(articles[9].title, "Headline number 9 is long enough");
        assert_eq!(stub.calls_to("/translate_a/single"), 0);
    }

    #[tokio::test]
    async fn test_requests_query_in_display_language() {
        let stub = StubTransport::new().route("/everything", Reply::Json(listing(vec![])));
        fetcher(&stub).fetch("copa del mundo").await;

        let calls = stub.calls();
        let pairs: Vec<(String, String)> = calls[0].query_pairs().into_owned().collect();
        assert!(pairs.contains(&("q".to_string(), "copa del mundo".to_string())));
        assert!(pairs.contains(&("language".to_string(), "es".to_string())));
        assert!(pairs.contains(&("pageSize".to_string(), "10".to_string())));
    }

    #[tokio::test]
    async fn test_content_falls_back_to_description() {
        let mut no_content = valid(1);
        no_content["content"] = json!(null);
        let stub = StubTransport::new()
            .route("/everything", Reply::Json(listing(vec![valid(0), no_content])));

        let articles = fetcher(&stub).fetch("x").await.into_data();
        assert_eq!(articles[0].content, "Content 0");
        assert_eq!(articles[1].content, "Description number 1 is long enough");
    }

    #[tokio::test]
    async fn test_filters_invalid_and_applies_placeholder() {
        let mut no_image = valid(3);
        no_image["urlToImage"] = json!("");
        let stub = StubTransport::new().route(
            "/everything",
            Reply::Json(listing(vec![removed(), short_title(), no_image])),
        );

        let articles = fetcher(&stub).fetch("x").await.into_data();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].url_to_image, PLACEHOLDER_IMAGE);
        assert_ne!(articles[0].title, "[Removed]");
    }

    #[tokio::test]
    async fn test_missing_list_and_failures_are_empty() {
        let stub = StubTransport::new().route("/everything", Reply::Json(json!({"status": "ok"})));
        assert_eq!(fetcher(&stub).fetch("x").await, Outcome::Complete(Vec::new()));

        for reply in [Reply::Status(500), Reply::Garbage] {
            let stub = StubTransport::new().route("/everything", reply);
            let out = fetcher(&stub).fetch("x").await;
            assert!(out.is_degraded());
            assert!(out.data().is_empty());
        }
    }
}
