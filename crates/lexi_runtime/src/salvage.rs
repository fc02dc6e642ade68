//! Repair for a known generator failure mode.
//!
//! Some models occasionally wrap a plain prose answer as
//! `{"response": "..."}` despite the instruction forbidding it. That object
//! carries no interactive vocabulary, so the parser would pass it through as
//! literal JSON text. The runtime unwraps it before parsing; the parser
//! itself never does.

use lexi_parser::ElementKind;
use serde_json::Value;

/// If the reply is exactly a `{"response": "..."}` object with no recognized
/// interactive key, return the inner string. Otherwise `None`.
pub fn unwrap_response_wrapper(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if !(trimmed.starts_with('{') && trimmed.ends_with('}')) {
        return None;
    }

    let value: Value = serde_json::from_str(trimmed).ok()?;
    let object = value.as_object()?;

    if object.keys().any(|key| ElementKind::from_key(key).is_some()) {
        return None;
    }

    match object.get("response") {
        Some(Value::String(inner)) => Some(inner.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwraps_plain_response_wrapper() {
        let raw = r#"{"response": "Good job! Let's continue."}"#;
        assert_eq!(
            unwrap_response_wrapper(raw).as_deref(),
            Some("Good job! Let's continue.")
        );
    }

    #[test]
    fn test_ignores_surrounding_whitespace() {
        let raw = "  {\"response\": \"hello\"}  \n";
        assert_eq!(unwrap_response_wrapper(raw).as_deref(), Some("hello"));
    }

    #[test]
    fn test_leaves_interactive_objects_alone() {
        let raw = r#"{"response": "x", "suggestions": ["a", "b"]}"#;
        assert_eq!(unwrap_response_wrapper(raw), None);
    }

    #[test]
    fn test_leaves_non_string_response_alone() {
        assert_eq!(unwrap_response_wrapper(r#"{"response": 42}"#), None);
    }

    #[test]
    fn test_leaves_prose_alone() {
        assert_eq!(unwrap_response_wrapper("just some text"), None);
    }

    #[test]
    fn test_leaves_embedded_wrapper_alone() {
        // Wrapper must be the whole reply, not a fragment of it.
        let raw = "intro {\"response\": \"hello\"}";
        assert_eq!(unwrap_response_wrapper(raw), None);
    }
}
