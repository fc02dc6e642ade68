use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::LearnerProfile;
use crate::turn::Turn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One learner's tutoring conversation.
///
/// `prompt_fingerprint` pins the system-instruction configuration the session
/// was started with; when the live configuration's fingerprint differs, the
/// session is stale and must be rebuilt so the new instruction takes effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TutorSession {
    pub id: SessionId,
    pub learner: String,
    pub profile: LearnerProfile,
    pub prompt_fingerprint: String,
    pub turns: Vec<Turn>,
    pub created_at: DateTime<Utc>,
}

impl TutorSession {
    pub fn new(
        learner: impl Into<String>,
        profile: LearnerProfile,
        prompt_fingerprint: impl Into<String>,
    ) -> Self {
        Self {
            id: SessionId::new(),
            learner: learner.into(),
            profile,
            prompt_fingerprint: prompt_fingerprint.into(),
            turns: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn add_turn(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Whether this session was built against the given prompt fingerprint.
    pub fn matches_prompt(&self, fingerprint: &str) -> bool {
        self.prompt_fingerprint == fingerprint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_is_uuid() {
        let id = SessionId::new();
        assert_eq!(id.as_str().len(), 36);
        assert_eq!(format!("{id}"), id.as_str());
    }

    #[test]
    fn test_session_new() {
        let session = TutorSession::new("Kim", LearnerProfile::new(), "fp-1");
        assert_eq!(session.learner, "Kim");
        assert!(session.turns.is_empty());
        assert!(session.matches_prompt("fp-1"));
        assert!(!session.matches_prompt("fp-2"));
    }

    #[test]
    fn test_session_add_turn() {
        let mut session = TutorSession::new("Kim", LearnerProfile::new(), "fp-1");
        session.add_turn(Turn::user("start"));
        session.add_turn(Turn::assistant("welcome"));
        assert_eq!(session.turn_count(), 2);
    }

    #[test]
    fn test_session_serialization() {
        let session = TutorSession::new(
            "Kim",
            LearnerProfile::new().with_answer("certified", "yes"),
            "fp-1",
        );
        let json = serde_json::to_string(&session).unwrap();
        let decoded: TutorSession = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, session.id);
        assert_eq!(decoded.learner, "Kim");
        assert!(decoded.profile.is_yes("certified"));
    }
}
