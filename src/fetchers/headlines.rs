//! Top headlines for a category, validated and translated.
//!
//! # Pipeline
//!
//! 1. `GET /top-headlines` for the category (fixed country and page size)
//! 2. Keep records passing [`validate`], in upstream order, capped at
//!    `headline_limit`
//! 3. For each survivor, one at a time: translate the title and the first
//!    `description_excerpt_chars` characters of the description concurrently,
//!    then pause before the next survivor (never after the last)
//! 4. Fill in the placeholder image where the record has none
//!
//! A failed list request yields an empty list. A survivor whose translations
//! come back unusable is kept with its original text.

use crate::api::HttpGet;
use crate::config::{Config, NewsApiSettings};
use crate::error::{FetchError, Outcome};
use crate::fetchers::fetch_raw_articles;
use crate::models::{Article, Category, RawApiArticle, ValidArticle};
use crate::pacing::{Pace, run_paced};
use crate::translate::Translate;
use crate::utils::{image_or_placeholder, non_blank, truncate_chars};
use crate::validate::validate;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// Fetches and translates top headlines.
#[derive(Debug, Clone)]
pub struct HeadlineFetcher<H, T, P> {
    http: H,
    translator: T,
    pacer: P,
    news_api: NewsApiSettings,
    limit: usize,
    excerpt_chars: usize,
    placeholder_image: String,
}

impl<H, T, P> HeadlineFetcher<H, T, P>
where
    H: HttpGet,
    T: Translate,
    P: Pace,
{
    /// Build a fetcher.
    ///
    /// # Arguments
    ///
    /// * `http` - Transport for the `top-headlines` request
    /// * `translator` - Translates each title and description excerpt
    /// * `pacer` - Wait inserted between consecutive headlines
    /// * `config` - Endpoint settings, caps and placeholder image
    pub fn new(http: H, translator: T, pacer: P, config: &Config) -> Self {
        Self {
            http,
            translator,
            pacer,
            news_api: config.news_api.clone(),
            limit: config.headline_limit,
            excerpt_chars: config.description_excerpt_chars,
            placeholder_image: config.placeholder_image.clone(),
        }
    }

    /// Up to `headline_limit` display-ready headlines for `category`.
    ///
    /// Never fails. The outcome is degraded when the list request failed
    /// (and the list is empty) or when some headlines kept untranslated text.
    #[instrument(level = "info", skip_all, fields(category = %category))]
    pub async fn fetch(&self, category: Category) -> Outcome<Vec<Article>> {
        let t0 = Instant::now();
        let raw = match self.request(category).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "Headline request failed; returning no articles");
                return Outcome::degraded(Vec::new(), e.to_string());
            }
        };

        let fetched = raw.len();
        let survivors: Vec<ValidArticle> = raw
            .into_iter()
            .filter_map(validate)
            .take(self.limit)
            .collect();
        let total = survivors.len();
        info!(fetched, kept = total, "Validated headlines");

        let results = run_paced(&self.pacer, survivors, move |index, valid| {
            self.translate_article(index, valid)
        })
        .await;

        let untranslated = results.iter().filter(|r| r.is_degraded()).count();
        let articles: Vec<Article> = results.into_iter().map(Outcome::into_data).collect();
        info!(
            count = articles.len(),
            untranslated,
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Headlines ready"
        );

        if untranslated == 0 {
            Outcome::Complete(articles)
        } else {
            Outcome::degraded(
                articles,
                format!("{untranslated} of {total} headlines kept untranslated text"),
            )
        }
    }

    async fn request(&self, category: Category) -> Result<Vec<RawApiArticle>, FetchError> {
        let url = self.news_api.top_headlines_url(category)?;
        fetch_raw_articles(&self.http, &url).await
    }

    async fn translate_article(&self, index: usize, valid: ValidArticle) -> Outcome<Article> {
        match self.translated(&valid).await {
            Ok(article) => {
                debug!(index, degraded = article.is_degraded(), "Headline translated");
                article
            }
            Err(e) => {
                warn!(index, error = %e, "Translation unusable; keeping original text");
                let title = valid.title.clone();
                let description = valid.description.clone();
                Outcome::degraded(self.assemble(&valid, title, description), e.to_string())
            }
        }
    }

    /// Translate title and description excerpt together.
    ///
    /// Each translation already falls back to its input on failure; this only
    /// errors when the resulting pair would leave the headline blank.
    async fn translated(&self, valid: &ValidArticle) -> Result<Outcome<Article>, FetchError> {
        let excerpt = truncate_chars(&valid.description, self.excerpt_chars);
        let (title, description) = futures::join!(
            self.translator.translate(&valid.title),
            self.translator.translate(excerpt),
        );

        let reason = [title.reason(), description.reason()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("; ");
        let (title, description) = (title.into_data(), description.into_data());
        if title.trim().is_empty() || description.trim().is_empty() {
            return Err(FetchError::Shape("translation left title or description blank"));
        }

        let article = self.assemble(valid, title, description);
        Ok(if reason.is_empty() {
            Outcome::Complete(article)
        } else {
            Outcome::degraded(article, reason)
        })
    }

    fn assemble(&self, valid: &ValidArticle, title: String, description: String) -> Article {
        let content = non_blank(valid.content.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| description.clone());
        Article {
            title,
            description,
            url: valid.url.clone().unwrap_or_default(),
            url_to_image: image_or_placeholder(valid.url_to_image.as_deref(), &self.placeholder_image),
            content,
        }
    }
}
