use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::ToolError;

/// Label reported when no known format matches
pub const UNKNOWN_FORMAT: &str = "unknown";

/// Identifier case formats understood by `transform_case`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseFormat {
    #[serde(rename = "snake_case")]
    Snake,
    #[serde(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnake,
    #[serde(rename = "camelCase")]
    Camel,
    #[serde(rename = "PascalCase")]
    Pascal,
    #[serde(rename = "kebab-case")]
    Kebab,
    #[serde(rename = "Title Case")]
    Title,
}

impl CaseFormat {
    /// Detection order; the first matching pattern wins
    pub const ALL: [CaseFormat; 6] = [
        CaseFormat::Snake,
        CaseFormat::ScreamingSnake,
        CaseFormat::Camel,
        CaseFormat::Pascal,
        CaseFormat::Kebab,
        CaseFormat::Title,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CaseFormat::Snake => "snake_case",
            CaseFormat::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            CaseFormat::Camel => "camelCase",
            CaseFormat::Pascal => "PascalCase",
            CaseFormat::Kebab => "kebab-case",
            CaseFormat::Title => "Title Case",
        }
    }

    /// Comma-separated list of every label, in detection order
    pub fn valid_labels() -> String {
        Self::ALL
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Join lowercase words in this format
    pub fn join(self, words: &[String]) -> String {
        match self {
            CaseFormat::Snake => words.join("_"),
            CaseFormat::ScreamingSnake => words
                .iter()
                .map(|w| w.to_uppercase())
                .collect::<Vec<_>>()
                .join("_"),
            CaseFormat::Camel => match words.split_first() {
                Some((first, rest)) => {
                    let mut out = first.clone();
                    for w in rest {
                        out.push_str(&capitalize(w));
                    }
                    out
                }
                None => String::new(),
            },
            CaseFormat::Pascal => words.iter().map(|w| capitalize(w)).collect(),
            CaseFormat::Kebab => words.join("-"),
            CaseFormat::Title => words
                .iter()
                .map(|w| capitalize(w))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl fmt::Display for CaseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CaseFormat {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.label() == s)
            .ok_or_else(|| ToolError::UnknownCase {
                target: s.to_string(),
                valid: Self::valid_labels(),
            })
    }
}

// a single trailing newline is tolerated at the end of input
static DETECTORS: LazyLock<Vec<(CaseFormat, Regex)>> = LazyLock::new(|| {
    [
        (CaseFormat::Snake, r"^[a-z][a-z0-9]*(_[a-z0-9]+)+\n?\z"),
        (CaseFormat::ScreamingSnake, r"^[A-Z][A-Z0-9]*(_[A-Z0-9]+)+\n?\z"),
        (CaseFormat::Camel, r"^[a-z][a-zA-Z0-9]*\n?\z"),
        (CaseFormat::Pascal, r"^[A-Z][a-zA-Z0-9]*\n?\z"),
        (CaseFormat::Kebab, r"^[a-z][a-z0-9]*(-[a-z0-9]+)+\n?\z"),
        (CaseFormat::Title, r"^[A-Z][a-z]+(?: [A-Z][a-z]+)+\n?\z"),
    ]
    .into_iter()
    .map(|(format, pattern)| {
        let re = Regex::new(pattern).expect("case detection pattern is valid");
        (format, re)
    })
    .collect()
});

static LOWER_THEN_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("boundary pattern is valid"));

static ACRONYM_THEN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("acronym pattern is valid"));

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("separator pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformCaseResult {
    pub original: String,
    pub transformed: String,
    pub from_format: String,
    pub to_format: String,
}

/// Detect the case format of `text`, `None` if nothing matches
pub fn detect_case(text: &str) -> Option<CaseFormat> {
    DETECTORS
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(format, _)| *format)
}

/// Split `text` into lowercase words regardless of its source format
pub fn split_words(text: &str) -> Vec<String> {
    let text = LOWER_THEN_UPPER.replace_all(text, "${1}_${2}");
    let text = ACRONYM_THEN_WORD.replace_all(&text, "${1}_${2}");
    NON_ALNUM
        .split(&text)
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Convert `text` to the case format named by `target`
pub fn transform_case(text: &str, target: &str) -> Result<TransformCaseResult, ToolError> {
    let target: CaseFormat = target.parse()?;
    let from_format = detect_case(text).map_or(UNKNOWN_FORMAT, CaseFormat::label);
    let words = split_words(text);

    Ok(TransformCaseResult {
        original: text.to_string(),
        transformed: target.join(&words),
        from_format: from_format.to_string(),
        to_format: target.label().to_string(),
    })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_to_camel() {
        let result = transform_case("hello_world_test", "camelCase").unwrap();
        assert_eq!(result.transformed, "helloWorldTest");
        assert_eq!(result.from_format, "snake_case");
        assert_eq!(result.to_format, "camelCase");
    }

    #[test]
    fn test_camel_to_snake() {
        let result = transform_case("helloWorldTest", "snake_case").unwrap();
        assert_eq!(result.transformed, "hello_world_test");
        assert_eq!(result.from_format, "camelCase");
    }

    #[test]
    fn test_pascal_to_kebab() {
        let result = transform_case("HelloWorld", "kebab-case").unwrap();
        assert_eq!(result.transformed, "hello-world");
        assert_eq!(result.from_format, "PascalCase");
    }

    #[test]
    fn test_to_screaming_pascal_and_title() {
        assert_eq!(
            transform_case("hello_world", "SCREAMING_SNAKE_CASE")
                .unwrap()
                .transformed,
            "HELLO_WORLD"
        );
        assert_eq!(
            transform_case("hello-world", "PascalCase").unwrap().transformed,
            "HelloWorld"
        );
        assert_eq!(
            transform_case("hello_world", "Title Case").unwrap().transformed,
            "Hello World"
        );
    }

    #[test]
    fn test_detection_order() {
        assert_eq!(detect_case("HELLO_WORLD"), Some(CaseFormat::ScreamingSnake));
        assert_eq!(detect_case("hello-world"), Some(CaseFormat::Kebab));
        assert_eq!(detect_case("Hello World"), Some(CaseFormat::Title));
        // single lowercase word is claimed by camelCase before anything else
        assert_eq!(detect_case("hello"), Some(CaseFormat::Camel));
        assert_eq!(detect_case("hello world"), None);
        assert_eq!(detect_case(""), None);
    }

    #[test]
    fn test_detection_allows_one_trailing_newline() {
        assert_eq!(detect_case("hello_world\n"), Some(CaseFormat::Snake));
        assert_eq!(detect_case("Hello World\n"), Some(CaseFormat::Title));
        assert_eq!(detect_case("hello_world\n\n"), None);
        assert_eq!(
            transform_case("hello_world\n", "camelCase").unwrap().from_format,
            "snake_case"
        );
    }

    #[test]
    fn test_unknown_source_reported() {
        let result = transform_case("hello world!", "snake_case").unwrap();
        assert_eq!(result.from_format, UNKNOWN_FORMAT);
        assert_eq!(result.transformed, "hello_world");
    }

    #[test]
    fn test_split_words_acronyms() {
        assert_eq!(split_words("parseHTTPResponse"), vec!["parse", "http", "response"]);
        assert_eq!(split_words("XMLHttpRequest"), vec!["xml", "http", "request"]);
        assert_eq!(split_words("version2Update"), vec!["version2", "update"]);
        assert_eq!(split_words("  --a__b--  "), vec!["a", "b"]);
    }

    #[test]
    fn test_invalid_target_lists_valid_formats() {
        let err = transform_case("hello", "invalid_case").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Unknown target case 'invalid_case'"));
        assert!(msg.contains(
            "snake_case, SCREAMING_SNAKE_CASE, camelCase, PascalCase, kebab-case, Title Case"
        ));
    }

    #[test]
    fn test_empty_input_joins_to_empty() {
        for format in CaseFormat::ALL {
            let result = transform_case("", format.label()).unwrap();
            assert_eq!(result.transformed, "");
        }
    }

    #[test]
    fn test_label_round_trips_through_from_str() {
        for format in CaseFormat::ALL {
            assert_eq!(format.label().parse::<CaseFormat>().unwrap(), format);
        }
    }
}
