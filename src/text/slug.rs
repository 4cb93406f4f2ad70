use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static SLUG_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugResult {
    pub original: String,
    pub slug: String,
}

/// Convert `text` into a lowercase, hyphen-delimited ASCII slug
pub fn slugify(text: &str) -> SlugResult {
    // NFKD splits accented letters into base + combining mark; the marks are non-ASCII
    let ascii: String = text.nfkd().filter(char::is_ascii).collect();
    let lowered = ascii.to_ascii_lowercase();
    let slug = SLUG_SEPARATOR
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string();

    SlugResult {
        original: text.to_string(),
        slug,
    }
}
