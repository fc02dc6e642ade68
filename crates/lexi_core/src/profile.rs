use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Answers to the background questions asked before the tutoring session
/// starts. Keys are question ids, values are free-form answers; yes/no
/// questions use `"yes"`/`"no"` (the legacy frontend sent `ja`/`nej`, which
/// is also accepted).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LearnerProfile {
    answers: BTreeMap<String, String>,
}

impl LearnerProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.answers.insert(key.into(), value.into());
        self
    }

    pub fn answer(&self, key: &str) -> Option<&str> {
        self.answers.get(key).map(String::as_str)
    }

    /// Whether a yes/no question was answered affirmatively. Missing answers
    /// count as "no".
    pub fn is_yes(&self, key: &str) -> bool {
        matches!(
            self.answer(key).map(str::trim),
            Some(v) if v.eq_ignore_ascii_case("yes") || v.eq_ignore_ascii_case("ja")
        )
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        let profile = LearnerProfile::new()
            .with_answer("certified", "yes")
            .with_answer("experienced", "Ja")
            .with_answer("other", "no");
        assert!(profile.is_yes("certified"));
        assert!(profile.is_yes("experienced"));
        assert!(!profile.is_yes("other"));
        assert!(!profile.is_yes("missing"));
    }

    #[test]
    fn test_serialization_is_transparent() {
        let profile = LearnerProfile::new().with_answer("certified", "yes");
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"certified":"yes"}"#);
        let decoded: LearnerProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, profile);
    }
}
