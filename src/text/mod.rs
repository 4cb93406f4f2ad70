//! Pure text transforms backing each MCP tool.
//!
//! Every function takes borrowed input and returns an owned, serializable
//! result. Lengths are counted in Unicode scalar values.

pub mod case;
pub mod info;
pub mod reverse;
pub mod slug;
pub mod tokens;
pub mod truncate;
pub mod urls;

pub use case::{CaseFormat, TransformCaseResult, detect_case, split_words, transform_case};
pub use info::{TextInfo, text_info};
pub use reverse::{ReverseResult, reverse_text};
pub use slug::{SlugResult, slugify};
pub use tokens::{TokenEstimate, count_tokens};
pub use truncate::{DEFAULT_MAX_LENGTH, DEFAULT_SUFFIX, TruncateResult, truncate};
pub use urls::{ExtractUrlsResult, extract_urls};
