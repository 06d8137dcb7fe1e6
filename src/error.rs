//! Error and outcome types shared by the fetch pipeline.
//!
//! Two layers:
//! - [`FetchError`]: what actually went wrong on a single request. It is used
//!   at the transport seam and inside the fetchers, and never leaves them.
//! - [`Outcome`]: what the public operations return. There is always data;
//!   a degraded outcome additionally carries the reason so callers can log or
//!   test the fallback paths.

use thiserror::Error;

/// A failure on a single upstream request.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, timeout, TLS).
    ///
    /// The request URL is stripped on conversion: it carries the API key.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The upstream answered with a non-success HTTP status.
    #[error("upstream returned status {0}")]
    Status(u16),
    /// The body was not valid JSON.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The body was JSON but not in the expected shape.
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),
    /// An endpoint URL could not be built from configuration.
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.without_url())
    }
}

/// Result of an operation that never fails outright.
///
/// `Degraded` means a fallback was taken somewhere along the way: the data is
/// still usable (possibly empty, possibly untranslated) and `reason` says why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Every step succeeded.
    Complete(T),
    /// A fallback was taken; `data` is still safe to display.
    Degraded { data: T, reason: String },
}

impl<T> Outcome<T> {
    /// Build a degraded outcome.
    ///
    /// # Arguments
    ///
    /// * `data` - The fallback value handed to the caller
    /// * `reason` - Human-readable cause, typically a [`FetchError`] message
    pub fn degraded(data: T, reason: impl Into<String>) -> Self {
        Outcome::Degraded {
            data,
            reason: reason.into(),
        }
    }

    /// Borrow the data, whichever variant this is.
    pub fn data(&self) -> &T {
        match self {
            Outcome::Complete(data) | Outcome::Degraded { data, .. } => data,
        }
    }

    /// Take the data, dropping any degradation reason.
    pub fn into_data(self) -> T {
        match self {
            Outcome::Complete(data) | Outcome::Degraded { data, .. } => data,
        }
    }

    /// `true` when a fallback was taken.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Outcome::Degraded { .. })
    }

    /// Why the outcome is degraded, or `None` when it is complete.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Complete(_) => None,
            Outcome::Degraded { reason, .. } => Some(reason),
        }
    }
}
