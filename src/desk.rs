//! A reading session over the two fetchers.
//!
//! [`NewsDesk`] keeps what a headline list view needs between calls: the
//! selected category, the last headline result and the list currently shown.
//! Searching with a blank query puts the last headlines back without a
//! request; any other query replaces the shown list with search results.

use crate::api::{HttpGet, ReqwestTransport};
use crate::config::Config;
use crate::error::{FetchError, Outcome};
use crate::fetchers::headlines::HeadlineFetcher;
use crate::fetchers::search::SearchFetcher;
use crate::models::{Article, Category};
use crate::pacing::{FixedDelay, Pace};
use crate::translate::{Translate, Translator};
use tracing::{debug, info, instrument, warn};

/// The production stack: reqwest transport, endpoint translator, fixed delay.
pub type LiveDesk = NewsDesk<ReqwestTransport, Translator<ReqwestTransport>, FixedDelay>;

/// State of one reading session over the headline and search fetchers.
///
/// Fetch results are never errors; degraded outcomes are logged and their
/// data shown as is.
pub struct NewsDesk<H, T, P> {
    headlines: HeadlineFetcher<H, T, P>,
    search: SearchFetcher<H>,
    category: Category,
    last_headlines: Vec<Article>,
    shown: Vec<Article>,
}

impl LiveDesk {
    /// Wire the real HTTP stack from `config`.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let http = ReqwestTransport::new(config.request_timeout())?;
        let translator = Translator::new(http.clone(), config.translation.clone());
        let pacer = FixedDelay::new(config.article_delay());
        Ok(NewsDesk::new(
            HeadlineFetcher::new(http.clone(), translator, pacer, config),
            SearchFetcher::new(http, config),
        ))
    }
}

impl<H, T, P> NewsDesk<H, T, P>
where
    H: HttpGet,
    T: Translate,
    P: Pace,
{
    /// Start a session on [`Category::General`] with nothing shown yet.
    pub fn new(headlines: HeadlineFetcher<H, T, P>, search: SearchFetcher<H>) -> Self {
        Self {
            headlines,
            search,
            category: Category::default(),
            last_headlines: Vec::new(),
            shown: Vec::new(),
        }
    }

    /// Category of the last headline load.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The list currently on display.
    pub fn shown(&self) -> &[Article] {
        &self.shown
    }

    /// Article at `index` in the shown list, for the detail view.
    pub fn article(&self, index: usize) -> Option<&Article> {
        self.shown.get(index)
    }

    /// Switch category and load its headlines.
    #[instrument(level = "info", skip_all, fields(category = %category))]
    pub async fn select_category(&mut self, category: Category) -> &[Article] {
        self.category = category;
        self.load_headlines().await
    }

    /// Reload headlines for the current category.
    pub async fn refresh(&mut self) -> &[Article] {
        self.load_headlines().await
    }

    /// Show search results for `query`, or the last headlines when it is blank.
    #[instrument(level = "info", skip_all)]
    pub async fn search(&mut self, query: &str) -> &[Article] {
        if query.trim().is_empty() {
            debug!("Blank query; restoring last headlines");
            self.shown = self.last_headlines.clone();
            return &self.shown;
        }
        let outcome = self.search.fetch(query).await;
        self.shown = settle(outcome);
        &self.shown
    }

    async fn load_headlines(&mut self) -> &[Article] {
        let outcome = self.headlines.fetch(self.category).await;
        let articles = settle(outcome);
        info!(count = articles.len(), category = %self.category, "Headlines loaded");
        self.last_headlines = articles.clone();
        self.shown = articles;
        &self.shown
    }
}

fn settle(outcome: Outcome<Vec<Article>>) -> Vec<Article> {
    if let Some(reason) = outcome.reason() {
        warn!(%reason, "Showing degraded results");
    }
    outcome.into_data()
}
