//! Response cleanup for endpoint completions.

use serde_json::Value;

/// Normalize a raw completion for display.
///
/// Strips any echoed `Assistant:` tokens, then unwraps completions that come
/// back as a `{"response": ...}` JSON string. Unwrapping is best-effort; the
/// stripped text is kept whenever the JSON does not parse into that shape.
pub fn clean_response(raw: &str) -> String {
    let stripped = raw.replace("Assistant:", "");
    let stripped = stripped.trim();
    if stripped.starts_with("{\"response\":") {
        if let Some(inner) = unwrap_response_object(stripped) {
            return inner;
        }
    }
    stripped.to_string()
}

fn unwrap_response_object(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;
    match value.get("response")? {
        Value::String(inner) => Some(inner.trim().to_string()),
        other => Some(other.to_string()),
    }
}
