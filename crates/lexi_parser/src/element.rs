use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Closed vocabulary of interactive element kinds.
///
/// The string forms are the top-level JSON keys the generator is instructed
/// to emit, and the `type` strings the frontend switches on. `Media` and
/// `Exercise` are reserved kinds: recognized, but without a widget schema yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    Suggestions,
    Scenario,
    MultipleChoice,
    Matching,
    Ordering,
    Roleplay,
    Feedback,
    Media,
    Exercise,
}

impl ElementKind {
    /// All kinds, in discrimination priority order. When a decoded object
    /// carries more than one recognized key, the first match here wins.
    pub const ALL: [ElementKind; 9] = [
        ElementKind::Suggestions,
        ElementKind::Scenario,
        ElementKind::MultipleChoice,
        ElementKind::Matching,
        ElementKind::Ordering,
        ElementKind::Roleplay,
        ElementKind::Feedback,
        ElementKind::Media,
        ElementKind::Exercise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Suggestions => "suggestions",
            ElementKind::Scenario => "scenario",
            ElementKind::MultipleChoice => "multipleChoice",
            ElementKind::Matching => "matching",
            ElementKind::Ordering => "ordering",
            ElementKind::Roleplay => "roleplay",
            ElementKind::Feedback => "feedback",
            ElementKind::Media => "media",
            ElementKind::Exercise => "exercise",
        }
    }

    /// Look up a kind by its JSON key.
    pub fn from_key(key: &str) -> Option<ElementKind> {
        Self::ALL.iter().copied().find(|k| k.as_str() == key)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured widget description extracted from a reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractiveElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub data: Value,
}

impl InteractiveElement {
    /// Accept a decoded JSON value as an interactive element.
    ///
    /// Returns `None` unless the value is an object with at least one
    /// recognized key at its top level. Unwrap convention: when the
    /// recognized key is the *only* key, `data` is its inner value;
    /// otherwise `data` is the full object.
    pub fn from_value(value: Value) -> Option<InteractiveElement> {
        let obj = value.as_object()?;
        let kind = recognized_kind(obj)?;
        let data = if obj.len() == 1 {
            obj[kind.as_str()].clone()
        } else {
            value
        };
        Some(InteractiveElement { kind, data })
    }
}

fn recognized_kind(obj: &Map<String, Value>) -> Option<ElementKind> {
    ElementKind::ALL
        .iter()
        .copied()
        .find(|k| obj.contains_key(k.as_str()))
}

/// The parser's output for one generator turn.
///
/// `text_content` is never absent; it is the empty string when the whole
/// reply was consumed by the structured payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedReply {
    #[serde(rename = "textContent")]
    pub text_content: String,
    #[serde(rename = "interactiveElement")]
    pub interactive_element: Option<InteractiveElement>,
}

impl ParsedReply {
    /// Plain-text reply with no interactive payload.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text_content: content.into(),
            interactive_element: None,
        }
    }

    /// Empty reply (empty input).
    pub fn empty() -> Self {
        Self::text("")
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive_element.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_round_trip() {
        for kind in ElementKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let decoded: ElementKind = serde_json::from_str(&json).unwrap();
            assert_eq!(decoded, kind);
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(
            ElementKind::from_key("multipleChoice"),
            Some(ElementKind::MultipleChoice)
        );
        assert_eq!(ElementKind::from_key("response"), None);
        assert_eq!(ElementKind::from_key("text"), None);
    }

    #[test]
    fn test_single_key_unwraps_to_inner_value() {
        let value = json!({"scenario": {"title": "T", "options": []}});
        let element = InteractiveElement::from_value(value).unwrap();
        assert_eq!(element.kind, ElementKind::Scenario);
        assert_eq!(element.data, json!({"title": "T", "options": []}));
    }

    #[test]
    fn test_multi_key_keeps_full_object() {
        let value = json!({"text": "Pick one", "suggestions": [{"label": "A", "value": "a"}]});
        let element = InteractiveElement::from_value(value.clone()).unwrap();
        assert_eq!(element.kind, ElementKind::Suggestions);
        assert_eq!(element.data, value);
    }

    #[test]
    fn test_unrecognized_object_is_not_interactive() {
        assert!(InteractiveElement::from_value(json!({"response": "hello"})).is_none());
        assert!(InteractiveElement::from_value(json!({"text": "just text"})).is_none());
        assert!(InteractiveElement::from_value(json!(["suggestions"])).is_none());
        assert!(InteractiveElement::from_value(json!("suggestions")).is_none());
    }

    #[test]
    fn test_discrimination_order_is_fixed() {
        // Both keys recognized; priority order picks suggestions.
        let value = json!({"feedback": {"message": "m"}, "suggestions": []});
        let element = InteractiveElement::from_value(value).unwrap();
        assert_eq!(element.kind, ElementKind::Suggestions);
    }

    #[test]
    fn test_reply_serialization_field_names() {
        let reply = ParsedReply {
            text_content: "hi".to_string(),
            interactive_element: Some(InteractiveElement {
                kind: ElementKind::Feedback,
                data: json!({"message": "m"}),
            }),
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["textContent"], "hi");
        assert_eq!(json["interactiveElement"]["type"], "feedback");
        assert_eq!(json["interactiveElement"]["data"]["message"], "m");
    }

    #[test]
    fn test_plain_reply_serializes_null_element() {
        let json = serde_json::to_value(ParsedReply::text("hello")).unwrap();
        assert!(json["interactiveElement"].is_null());
    }
}
