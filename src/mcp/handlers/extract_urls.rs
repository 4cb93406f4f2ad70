use serde_json::Value;

use crate::error::ToolError;
use crate::mcp::helpers;
use crate::text;

pub(crate) fn handle(args: &Value) -> Result<Value, ToolError> {
    let input = helpers::require_str(args, "text")?;
    Ok(serde_json::to_value(text::extract_urls(input))?)
}
