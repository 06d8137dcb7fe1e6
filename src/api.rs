//! HTTP transport for the NewsAPI and translation endpoints.
//!
//! All network I/O goes through the [`HttpGet`] trait, so the fetchers and the
//! translator can be exercised without a network:
//! - [`HttpGet`]: core trait, one GET returning parsed JSON
//! - [`ReqwestTransport`]: the production implementation on top of `reqwest`
//!
//! No retries happen here. A failed request is reported once and the caller
//! decides how to degrade.

use crate::error::FetchError;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};
use url::Url;

/// Trait for a single JSON-returning GET request.
///
/// The returned futures are not required to be `Send`; the pipeline awaits
/// them on a single task.
#[allow(async_fn_in_trait)]
pub trait HttpGet {
    /// Fetch `url` and parse the body as JSON.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Transport`] when no response arrives (including timeouts)
    /// - [`FetchError::Status`] for any non-2xx status
    /// - [`FetchError::Decode`] when the body is not JSON
    async fn get_json(&self, url: &Url) -> Result<Value, FetchError>;
}

/// [`HttpGet`] backed by a shared `reqwest::Client`.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    async fn send(&self, url: &Url) -> Result<Value, FetchError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl HttpGet for ReqwestTransport {
    #[instrument(level = "debug", skip_all, fields(url = %redacted(url)))]
    async fn get_json(&self, url: &Url) -> Result<Value, FetchError> {
        let t0 = Instant::now();
        let res = self.send(url).await;
        let dt = t0.elapsed();

        match &res {
            Ok(_) => debug!(elapsed_ms = dt.as_millis() as u64, "GET succeeded"),
            Err(e) => warn!(elapsed_ms = dt.as_millis() as u64, error = %e, "GET failed"),
        }
        res
    }
}

/// Render a URL for logs with the NewsAPI key masked.
pub fn redacted(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "apiKey") {
        return url.to_string();
    }
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apiKey" { "***".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
