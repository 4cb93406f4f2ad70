use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseResult {
    pub original: String,
    pub reversed: String,
    pub length: usize,
}

/// Reverse `text` by code point
pub fn reverse_text(text: &str) -> ReverseResult {
    ReverseResult {
        original: text.to_string(),
        reversed: text.chars().rev().collect(),
        length: text.chars().count(),
    }
}
