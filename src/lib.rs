//! # Headline Feed
//!
//! Fetches top headlines from [NewsAPI](https://newsapi.org), drops unusable
//! records, machine-translates what is left and hands back display-ready
//! articles. A free-text search returns results already in the display
//! language.
//!
//! ## Architecture
//!
//! Leaf first:
//! 1. **Validation** ([`validate`]): pure predicate over an upstream record
//! 2. **Translation** ([`translate`]): one string, one request, falls back to
//!    the input on any failure
//! 3. **Fetching** ([`fetchers`]): headline and search pipelines over the
//!    [`api::HttpGet`] transport, headlines paced by [`pacing`]
//! 4. **Session** ([`desk`]): category switching, refresh and search with
//!    revert-to-headlines
//!
//! Nothing in the pipeline returns an error to its caller. Fallbacks are
//! reported through [`error::Outcome`] and logged with `tracing`.

pub mod api;
pub mod config;
pub mod desk;
pub mod error;
pub mod fetchers;
pub mod models;
pub mod outputs;
pub mod pacing;
pub mod translate;
pub mod utils;
pub mod validate;

pub use config::Config;
pub use desk::{LiveDesk, NewsDesk};
pub use error::{FetchError, Outcome};
pub use models::{Article, Category, RawApiArticle};
