//! JSON output of article lists.

use crate::models::Article;

/// Pretty-printed JSON array of `articles`.
pub fn articles_to_json(articles: &[Article]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(articles)
}
