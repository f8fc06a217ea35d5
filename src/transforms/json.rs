use crate::error::Result;
use serde_json::Value;

/// Re-renders JSON with a 2-space indent, keeping the key order of the input.
pub fn prettify_json(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Re-renders JSON without any insignificant whitespace.
pub fn minify_json(text: &str) -> Result<String> {
    let value: Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string(&value)?)
}

/// Quotes the raw input as a single JSON string literal.
pub fn escape_json_string(text: &str) -> Result<String> {
    Ok(serde_json::to_string(text)?)
}
