use serde::{Deserialize, Serialize};
use unicode_general_category::{GeneralCategory, get_general_category};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInfo {
    pub text: String,
    pub length: usize,
    pub word_count: usize,
    pub char_count_no_spaces: usize,
    pub uppercase_count: usize,
    pub lowercase_count: usize,
    pub digit_count: usize,
    pub line_count: usize,
}

/// Character, word and line breakdown of `text`
pub fn text_info(text: &str) -> TextInfo {
    let mut info = TextInfo {
        text: text.to_string(),
        length: 0,
        word_count: text.split_whitespace().count(),
        char_count_no_spaces: 0,
        uppercase_count: 0,
        lowercase_count: 0,
        digit_count: 0,
        line_count: 1,
    };

    for c in text.chars() {
        info.length += 1;
        if c != ' ' {
            info.char_count_no_spaces += 1;
        }
        if c.is_uppercase() {
            info.uppercase_count += 1;
        } else if c.is_lowercase() {
            info.lowercase_count += 1;
        } else if is_decimal_digit(c) {
            info.digit_count += 1;
        }
        if c == '\n' {
            info.line_count += 1;
        }
    }

    info
}

/// Decimal digits in any script (category Nd); fractions and numerals are excluded
fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}
