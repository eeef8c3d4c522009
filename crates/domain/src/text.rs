//! String and path helpers.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]+").expect("valid regex"));

/// Converts text to a URL-friendly slug.
///
/// The text is lower-cased, every run of characters outside `[0-9a-z_]` is
/// replaced by a single `-`, and leading/trailing hyphens are removed.
///
/// # Examples
///
/// ```
/// use stencil_domain::text::slug;
///
/// assert_eq!(slug("Hello, World! 123"), "hello-world-123");
/// ```
#[must_use]
pub fn slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_WORD
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Truncates `text` to at most `limit` characters, appending `...` when cut.
#[must_use]
pub fn truncate_text(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Returns true if `text` contains any whitespace character.
#[must_use]
pub fn has_whitespace(text: &str) -> bool {
    text.chars().any(char::is_whitespace)
}

/// Removes duplicates while keeping the first occurrence of each element.
#[must_use]
pub fn remove_duplicates<T>(elements: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(elements.len());
    elements
        .iter()
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect()
}

/// Collapses doubled slashes and guarantees a single leading `/`.
#[must_use]
pub fn normalize_url_path(path: &str) -> String {
    let mut normalized = path.replace("//", "/");
    while normalized.contains("//") {
        normalized = normalized.replace("//", "/");
    }
    if !normalized.starts_with('/') {
        normalized.insert(0, '/');
    }
    normalized
}

/// Joins a base route with a blocked sub-path, dropping a trailing `/*` or `*`.
///
/// ```
/// use stencil_domain::text::route_path;
///
/// assert_eq!(route_path("api//v1", "/admin/*"), "/api/v1/admin");
/// ```
#[must_use]
pub fn route_path(base: &str, blocked: &str) -> String {
    let base = normalize_url_path(base);
    let suffix = blocked
        .strip_suffix("/*")
        .or_else(|| blocked.strip_suffix('*'))
        .unwrap_or(blocked);
    format!("{base}{suffix}")
}

/// Returns the path component of an absolute or relative URI.
///
/// Returns an empty string if the URI cannot be parsed.
#[must_use]
pub fn url_path(uri: &str) -> String {
    match Url::parse(uri) {
        Ok(url) => url.path().to_string(),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            // Resolve against a throwaway base so relative references parse.
            Url::parse("http://localhost/")
                .and_then(|base| base.join(uri))
                .map(|url| url.path().to_string())
                .unwrap_or_default()
        }
        Err(_) => String::new(),
    }
}
