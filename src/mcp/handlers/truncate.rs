use serde_json::Value;

use crate::error::ToolError;
use crate::mcp::helpers;
use crate::text;

pub(crate) fn handle(args: &Value) -> Result<Value, ToolError> {
    let input = helpers::require_str(args, "text")?;
    let max_length =
        helpers::optional_usize(args, "max_length")?.unwrap_or(text::DEFAULT_MAX_LENGTH);
    let suffix = helpers::optional_str(args, "suffix")?.unwrap_or(text::DEFAULT_SUFFIX);

    Ok(serde_json::to_value(text::truncate(input, max_length, suffix))?)
}
