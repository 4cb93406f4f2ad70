use serde::{Deserialize, Serialize};

/// Tokens per whitespace-delimited word
pub const TOKENS_PER_WORD: f64 = 1.3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEstimate {
    pub text: String,
    pub estimated_tokens: u64,
    pub word_count: usize,
    pub char_count: usize,
    pub method: String,
}

/// Word-based token estimate that approximates common LLM tokenizers
pub fn count_tokens(text: &str) -> TokenEstimate {
    let word_count = text.split_whitespace().count();
    let estimated_tokens = (word_count as f64 * TOKENS_PER_WORD).ceil() as u64;

    TokenEstimate {
        text: text.to_string(),
        estimated_tokens,
        word_count,
        char_count: text.chars().count(),
        method: "words * 1.3".to_string(),
    }
}
