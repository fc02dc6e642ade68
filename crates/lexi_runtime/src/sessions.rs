//! In-memory session store, keyed by learner name.

use std::collections::HashMap;
use std::sync::Arc;

use lexi_core::TutorSession;
use tokio::sync::RwLock;

/// Shared map of live sessions. One session per learner name; starting a new
/// session replaces the old one.
#[derive(Default, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, TutorSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, learner: &str) -> Option<TutorSession> {
        self.sessions.read().await.get(learner).cloned()
    }

    pub async fn insert(&self, session: TutorSession) {
        self.sessions
            .write()
            .await
            .insert(session.learner.clone(), session);
    }

    pub async fn remove(&self, learner: &str) -> Option<TutorSession> {
        self.sessions.write().await.remove(learner)
    }

    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexi_core::LearnerProfile;

    fn session_for(name: &str) -> TutorSession {
        TutorSession::new(name, LearnerProfile::new(), "fp")
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = SessionStore::new();
        store.insert(session_for("anna")).await;

        let session = store.get("anna").await.unwrap();
        assert_eq!(session.learner, "anna");
        assert!(store.get("bob").await.is_none());
    }

    #[tokio::test]
    async fn test_insert_replaces_existing() {
        let store = SessionStore::new();
        store.insert(session_for("anna")).await;
        let first_id = store.get("anna").await.unwrap().id;

        store.insert(session_for("anna")).await;
        let second_id = store.get("anna").await.unwrap().id;

        assert_ne!(first_id, second_id);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let store = SessionStore::new();
        store.insert(session_for("anna")).await;
        store.insert(session_for("bob")).await;

        assert!(store.remove("anna").await.is_some());
        assert_eq!(store.count().await, 1);

        store.clear().await;
        assert_eq!(store.count().await, 0);
    }
}
