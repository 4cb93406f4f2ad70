use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_LENGTH: usize = 100;
pub const DEFAULT_SUFFIX: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncateResult {
    pub original: String,
    pub truncated: String,
    pub original_length: usize,
    pub truncated_length: usize,
    pub was_truncated: bool,
}

/// Truncate `text` to at most `max_length` characters, suffix included,
/// cutting at the last word boundary when one exists.
pub fn truncate(text: &str, max_length: usize, suffix: &str) -> TruncateResult {
    let original_length = text.chars().count();

    if original_length <= max_length {
        return TruncateResult {
            original: text.to_string(),
            truncated: text.to_string(),
            original_length,
            truncated_length: original_length,
            was_truncated: false,
        };
    }

    let suffix_length = suffix.chars().count();
    let truncated = if max_length <= suffix_length {
        // no room for any text
        take_chars(suffix, max_length).to_string()
    } else {
        let mut cut = take_chars(text, max_length - suffix_length);
        if let Some(last_space) = cut.rfind(' ').filter(|&i| i > 0) {
            cut = &cut[..last_space];
        }
        format!("{}{}", cut.trim_end(), suffix)
    };

    TruncateResult {
        original: text.to_string(),
        truncated_length: truncated.chars().count(),
        truncated,
        original_length,
        was_truncated: true,
    }
}

/// Prefix of `s` holding at most `n` characters
fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: &str = "This is a longer sentence that should be truncated at a word boundary";

    #[test]
    fn test_short_text_unchanged() {
        let result = truncate("short", 100, DEFAULT_SUFFIX);
        assert_eq!(result.truncated, "short");
        assert!(!result.was_truncated);
        assert_eq!(result.truncated_length, 5);
    }

    #[test]
    fn test_exact_length_unchanged() {
        let result = truncate("abcde", 5, DEFAULT_SUFFIX);
        assert!(!result.was_truncated);
    }

    #[test]
    fn test_long_text_cut_at_word() {
        let result = truncate(LONG, 30, DEFAULT_SUFFIX);
        assert!(result.was_truncated);
        assert!(result.truncated_length <= 30);
        assert_eq!(result.truncated, "This is a longer sentence...");
        assert_eq!(result.original_length, LONG.chars().count());
    }

    #[test]
    fn test_custom_suffix() {
        let text = "This is a longer sentence that should be truncated";
        let result = truncate(text, 25, " [more]");
        assert!(result.truncated.ends_with("[more]"));
        assert!(result.truncated_length <= 25);
    }

    #[test]
    fn test_no_space_cuts_mid_word() {
        let result = truncate("abcdefghijklmnop", 10, DEFAULT_SUFFIX);
        assert_eq!(result.truncated, "abcdefg...");
    }

    #[test]
    fn test_leading_space_not_a_boundary() {
        let result = truncate(" abcdefghijklmnop", 10, DEFAULT_SUFFIX);
        assert_eq!(result.truncated, " abcdef...");
    }

    #[test]
    fn test_suffix_longer_than_limit() {
        let result = truncate("hello world", 2, DEFAULT_SUFFIX);
        assert_eq!(result.truncated, "..");
        assert!(result.was_truncated);

        let result = truncate("hello world", 3, DEFAULT_SUFFIX);
        assert_eq!(result.truncated, "...");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let result = truncate("ééééé ééééé", 8, DEFAULT_SUFFIX);
        assert_eq!(result.truncated, "ééééé...");
        assert_eq!(result.truncated_length, 8);
    }
}
