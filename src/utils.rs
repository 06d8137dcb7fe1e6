//! Small string helpers shared by the fetchers and the renderers.

/// The first `max` characters of `s`, cut on a character boundary.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// assert_eq!(truncate_chars("short", 100), "short");
/// ```
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings keep their first `max` characters followed by an ellipsis and
/// the number of bytes dropped.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    let head = truncate_chars(s, max);
    if head.len() == s.len() {
        s.to_string()
    } else {
        format!("{}…(+{} bytes)", head, s.len() - head.len())
    }
}

/// `Some` only for text with at least one non-whitespace character.
pub fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// The upstream image link, or `placeholder` when it is missing or empty.
pub fn image_or_placeholder(image: Option<&str>, placeholder: &str) -> String {
    match image {
        Some(link) if !link.is_empty() => link.to_string(),
        _ => placeholder.to_string(),
    }
}
