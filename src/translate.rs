//! Best-effort machine translation of single strings.
//!
//! The translation endpoint answers with a nested array whose first element's
//! first element's first element is the translated text:
//!
//! ```text
//! [[["Hola mundo", "Hello world", null, null, 10]], null, "en"]
//! ```
//!
//! Any deviation from that, and any failed request, degrades to returning the
//! input unchanged. Translation failure never reaches the caller as an error.

use crate::api::HttpGet;
use crate::config::TranslationSettings;
use crate::error::{FetchError, Outcome};
use crate::utils::truncate_for_log;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Trait for translating one string.
///
/// Futures are not required to be `Send`, matching [`HttpGet`].
#[allow(async_fn_in_trait)]
pub trait Translate {
    /// Translate `text`. Blank input yields an empty string.
    async fn translate(&self, text: &str) -> Outcome<String>;
}

/// [`Translate`] against the public translation endpoint.
///
/// One request per call, no retries.
#[derive(Debug, Clone)]
pub struct Translator<H> {
    http: H,
    settings: TranslationSettings,
}

impl<H: HttpGet> Translator<H> {
    /// Build a translator sending requests through `http`.
    pub fn new(http: H, settings: TranslationSettings) -> Self {
        Self { http, settings }
    }

    async fn request(&self, text: &str) -> Result<String, FetchError> {
        let url = self.settings.request_url(text)?;
        let body = self.http.get_json(&url).await?;
        first_segment(&body)
            .map(str::to_string)
            .ok_or(FetchError::Shape("missing translated segment"))
    }
}

impl<H: HttpGet> Translate for Translator<H> {
    #[instrument(level = "debug", skip_all, fields(chars = text.chars().count()))]
    async fn translate(&self, text: &str) -> Outcome<String> {
        if text.trim().is_empty() {
            return Outcome::Complete(String::new());
        }
        match self.request(text).await {
            Ok(translated) => {
                debug!(translated = %truncate_for_log(&translated, 80), "Translated");
                Outcome::Complete(translated)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    text = %truncate_for_log(text, 80),
                    "Translation failed; keeping original text"
                );
                Outcome::degraded(text.to_string(), e.to_string())
            }
        }
    }
}

/// `body[0][0][0]` when it is a non-empty string.
fn first_segment(body: &Value) -> Option<&str> {
    body.get(0)?
        .get(0)?
        .get(0)?
        .as_str()
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
pub(crate) mod recording {
    use super::Translate;
    use crate::error::Outcome;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Translator that logs each request and answers through `respond`.
    #[derive(Debug, Clone)]
    pub struct RecordingTranslator {
        pub log: Rc<RefCell<Vec<String>>>,
        respond: fn(&str) -> Outcome<String>,
    }

    pub fn echo(text: &str) -> Outcome<String> {
        Outcome::Complete(format!("es:{text}"))
    }

    impl RecordingTranslator {
        pub fn sharing(log: Rc<RefCell<Vec<String>>>) -> Self {
            Self { log, respond: echo }
        }

        pub fn responding(mut self, respond: fn(&str) -> Outcome<String>) -> Self {
            self.respond = respond;
            self
        }

        pub fn requests(&self) -> Vec<String> {
            self.log
                .borrow()
                .iter()
                .filter_map(|e| e.strip_prefix("translate ").map(str::to_string))
                .collect()
        }
    }

    impl Translate for RecordingTranslator {
        async fn translate(&self, text: &str) -> Outcome<String> {
            self.log.borrow_mut().push(format!("translate {text}"));
            (self.respond)(text)
        }
    }
}
