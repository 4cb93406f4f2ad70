use std::collections::HashMap;

use serde_json::{Value, json};

use super::handlers;
use super::protocol::Tool;
use crate::error::ToolError;
use crate::text::CaseFormat;

/// Every tool the server exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTool {
    ReverseText,
    TextInfo,
    TransformCase,
    Slugify,
    ExtractUrls,
    Truncate,
    CountTokens,
}

impl TextTool {
    /// Registration order, also the order of `tools/list`
    pub const ALL: [TextTool; 7] = [
        TextTool::ReverseText,
        TextTool::TextInfo,
        TextTool::TransformCase,
        TextTool::Slugify,
        TextTool::ExtractUrls,
        TextTool::Truncate,
        TextTool::CountTokens,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TextTool::ReverseText => "reverse_text",
            TextTool::TextInfo => "text_info",
            TextTool::TransformCase => "transform_case",
            TextTool::Slugify => "slugify",
            TextTool::ExtractUrls => "extract_urls",
            TextTool::Truncate => "truncate",
            TextTool::CountTokens => "count_tokens",
        }
    }

    pub fn description(self) -> String {
        match self {
            TextTool::ReverseText => "Reverse the characters in a text string.".to_string(),
            TextTool::TextInfo => {
                "Analyze a text string: word count, character breakdown, line count.".to_string()
            }
            TextTool::TransformCase => format!(
                "Convert text between case formats. Supported targets: {}.",
                CaseFormat::valid_labels()
            ),
            TextTool::Slugify => "Convert text into a URL-safe slug.".to_string(),
            TextTool::ExtractUrls => "Extract all URLs from a block of text.".to_string(),
            TextTool::Truncate => {
                "Truncate text at a word boundary with a configurable suffix.".to_string()
            }
            TextTool::CountTokens => "Estimate the token count for a text string. Uses a word-based heuristic (words * 1.3) which approximates most LLM tokenizers. Useful for checking if text fits within context windows.".to_string(),
        }
    }

    pub fn input_schema(self) -> Value {
        let text = json!({
            "type": "string",
            "description": "The text to process"
        });

        match self {
            TextTool::TransformCase => json!({
                "type": "object",
                "properties": {
                    "text": text,
                    "target": {
                        "type": "string",
                        "enum": CaseFormat::ALL.iter().map(|f| f.label()).collect::<Vec<_>>(),
                        "description": "Target case format"
                    }
                },
                "required": ["text", "target"]
            }),
            TextTool::Truncate => json!({
                "type": "object",
                "properties": {
                    "text": text,
                    "max_length": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Maximum length of the result, suffix included (default: 100)",
                        "default": crate::text::DEFAULT_MAX_LENGTH
                    },
                    "suffix": {
                        "type": "string",
                        "description": "Appended when the text is cut (default: \"...\")",
                        "default": crate::text::DEFAULT_SUFFIX
                    }
                },
                "required": ["text"]
            }),
            _ => json!({
                "type": "object",
                "properties": {
                    "text": text
                },
                "required": ["text"]
            }),
        }
    }

    pub fn descriptor(self) -> Tool {
        Tool {
            name: self.name().to_string(),
            description: self.description(),
            input_schema: self.input_schema(),
        }
    }

    /// Run the tool against raw `arguments`
    pub fn call(self, args: &Value) -> Result<Value, ToolError> {
        match self {
            TextTool::ReverseText => handlers::reverse_text::handle(args),
            TextTool::TextInfo => handlers::text_info::handle(args),
            TextTool::TransformCase => handlers::transform_case::handle(args),
            TextTool::Slugify => handlers::slugify::handle(args),
            TextTool::ExtractUrls => handlers::extract_urls::handle(args),
            TextTool::Truncate => handlers::truncate::handle(args),
            TextTool::CountTokens => handlers::count_tokens::handle(args),
        }
    }
}

/// Return all MCP tool definitions
pub fn tool_definitions() -> Vec<Tool> {
    TextTool::ALL.iter().map(|t| t.descriptor()).collect()
}

/// Name index over the fixed tool set. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    by_name: HashMap<&'static str, TextTool>,
    descriptors: Vec<Tool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            by_name: TextTool::ALL.iter().map(|t| (t.name(), *t)).collect(),
            descriptors: tool_definitions(),
        }
    }

    pub fn get(&self, name: &str) -> Option<TextTool> {
        self.by_name.get(name).copied()
    }

    pub fn descriptors(&self) -> &[Tool] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
