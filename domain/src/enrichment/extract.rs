//! Best-effort recovery of a JSON object embedded in arbitrary text
//!
//! LLM output reliably wraps valid JSON in explanatory prose or code fences
//! but is rarely malformed at the token level, so a permissive two-step
//! extraction covers the practical cases without attempting grammar repair.

use serde_json::{Map, Value};

/// Extract a JSON object from text that may contain surrounding prose.
///
/// Tries a direct parse first; on failure, parses the substring between the
/// first `{` and the last `}` inclusive. Returns `None` when both fail or
/// when the parsed value is not an object. Never panics, never partially
/// decodes.
pub fn extract_object(text: &str) -> Option<Map<String, Value>> {
    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(text) {
        return Some(object);
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}
