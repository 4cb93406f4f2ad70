//! Argument extraction for each tool; the transforms live in `crate::text`.

pub(crate) mod count_tokens;
pub(crate) mod extract_urls;
pub(crate) mod reverse_text;
pub(crate) mod slugify;
pub(crate) mod text_info;
pub(crate) mod transform_case;
pub(crate) mod truncate;
