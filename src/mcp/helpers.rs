use serde_json::Value;

use crate::error::ToolError;

/// Extract a required string argument
pub(crate) fn require_str<'a>(args: &'a Value, field: &'static str) -> Result<&'a str, ToolError> {
    match args.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ToolError::InvalidArgument {
            name: field,
            reason: "expected a string".to_string(),
        }),
        None => Err(ToolError::MissingArgument(field)),
    }
}

/// Extract an optional string argument, `null` treated as absent
pub(crate) fn optional_str<'a>(
    args: &'a Value,
    field: &'static str,
) -> Result<Option<&'a str>, ToolError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(ToolError::InvalidArgument {
            name: field,
            reason: "expected a string".to_string(),
        }),
    }
}

/// Extract an optional non-negative integer argument.
/// Whole-number floats such as `30.0` are accepted.
pub(crate) fn optional_usize(args: &Value, field: &'static str) -> Result<Option<usize>, ToolError> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_u64()
            .or_else(|| v.as_f64().and_then(whole_number))
            .and_then(|n| usize::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| ToolError::InvalidArgument {
                name: field,
                reason: format!("expected a non-negative integer, got {v}"),
            }),
    }
}

fn whole_number(f: f64) -> Option<u64> {
    (f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64).then_some(f as u64)
}
