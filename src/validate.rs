//! Decides whether an upstream record is usable.

use crate::models::{RawApiArticle, ValidArticle};

/// Title NewsAPI puts on records whose content was taken down.
pub const REMOVED_SENTINEL: &str = "[Removed]";

/// Titles and descriptions must be strictly longer than this, in characters.
pub const MIN_TEXT_CHARS: usize = 10;

fn long_enough(text: &str) -> bool {
    text.chars().count() > MIN_TEXT_CHARS
}

/// `true` iff the record has a non-sentinel title and a description, both
/// longer than [`MIN_TEXT_CHARS`]. A missing image does not matter here.
pub fn is_valid(raw: &RawApiArticle) -> bool {
    let title_ok = raw
        .title
        .as_deref()
        .is_some_and(|t| t != REMOVED_SENTINEL && long_enough(t));
    let description_ok = raw.description.as_deref().is_some_and(long_enough);
    title_ok && description_ok
}

/// Same rules as [`is_valid`], keeping the checked fields typed.
pub fn validate(raw: RawApiArticle) -> Option<ValidArticle> {
    if !is_valid(&raw) {
        return None;
    }
    let RawApiArticle {
        title,
        description,
        url,
        url_to_image,
        content,
    } = raw;
    Some(ValidArticle {
        title: title?,
        description: description?,
        url,
        url_to_image,
        content,
    })
}
