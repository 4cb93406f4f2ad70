use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)https?://[^\s<>"')\]]+"#).expect("url pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractUrlsResult {
    pub text: String,
    pub urls: Vec<String>,
    pub count: usize,
}

/// Find every http(s) URL in `text`, in order of appearance
pub fn extract_urls(text: &str) -> ExtractUrlsResult {
    let urls: Vec<String> = URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    ExtractUrlsResult {
        text: text.to_string(),
        count: urls.len(),
        urls,
    }
}
