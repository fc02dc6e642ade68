//! The tutoring service: session lifecycle, generation, reply parsing.

use std::sync::Arc;
use std::time::Instant;

use lexi_core::{LearnerProfile, SessionId, Turn, TutorSession};
use lexi_observability::{chat_span, record_duration, record_error};
use lexi_parser::{parse_reply, ParsedReply};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, Instrument};

use crate::config::RuntimeConfig;
use crate::error::RuntimeError;
use crate::generator::{GenerateRequest, Generator};
use crate::greeting::{build_greeting, build_initial_history};
use crate::prompt::{image_assets, load_education_plan, PromptConfig};
use crate::salvage::unwrap_response_wrapper;
use crate::sessions::SessionStore;

/// Learner message starting (or restarting) a session.
pub const START_MESSAGE: &str = "start";

/// One structured reply sent back to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(rename = "sessionId")]
    pub session_id: SessionId,
    pub reply: ParsedReply,
}

/// The tutoring backend: owns configuration, the generator and the session
/// store. Cheap to clone and share across request handlers.
#[derive(Clone)]
pub struct TutorService {
    config: RuntimeConfig,
    prompt: PromptConfig,
    generator: Arc<dyn Generator>,
    sessions: SessionStore,
}

impl TutorService {
    pub fn new(config: RuntimeConfig, prompt: PromptConfig, generator: Arc<dyn Generator>) -> Self {
        Self {
            config,
            prompt,
            generator,
            sessions: SessionStore::new(),
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn prompt(&self) -> &PromptConfig {
        &self.prompt
    }

    /// Handle one learner message.
    ///
    /// `"start"` always creates a fresh session and returns the greeting. Any
    /// other message continues the learner's session, rebuilding it first if
    /// the prompt configuration changed since the session was created.
    pub async fn handle_message(
        &self,
        learner: &str,
        profile: &LearnerProfile,
        message: &str,
    ) -> Result<ChatReply, RuntimeError> {
        if learner.trim().is_empty() {
            return Err(RuntimeError::Session("learner name is empty".to_string()));
        }

        if message.trim().eq_ignore_ascii_case(START_MESSAGE) {
            return Ok(self.start_session(learner, profile).await);
        }

        let fingerprint = self.prompt.fingerprint();
        let mut session = match self.sessions.get(learner).await {
            Some(session) if session.matches_prompt(&fingerprint) => session,
            Some(stale) => {
                info!(
                    learner,
                    old = %stale.prompt_fingerprint,
                    new = %fingerprint,
                    "prompt configuration changed, rebuilding session"
                );
                self.rebuild_session(&stale, &fingerprint)
            }
            None => {
                // No live session for this learner; begin one implicitly so a
                // backend restart does not strand the frontend.
                debug!(learner, "no session found, creating one");
                self.fresh_session(learner, profile, &fingerprint)
            }
        };

        let span = chat_span!(learner, session.id.as_str());

        let request = GenerateRequest {
            system_instruction: self.system_instruction(&session.profile),
            history: session.turns.clone(),
            message: message.to_string(),
            generation: self.config.generation,
        };

        let started = Instant::now();
        let raw = match self
            .generator
            .generate(request)
            .instrument(span.clone())
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                span.in_scope(|| record_error(&e));
                return Err(e);
            }
        };
        span.in_scope(|| record_duration("generate_ms", started.elapsed()));

        let cleaned = unwrap_response_wrapper(&raw).unwrap_or(raw);
        let reply = parse_reply(&cleaned);

        session.add_turn(Turn::user(message));
        session.add_turn(Turn::assistant(&cleaned));
        let session_id = session.id.clone();
        let turn_count = session.turn_count();
        self.sessions.insert(session).await;

        span.in_scope(|| {
            debug!(turns = turn_count, interactive = reply.is_interactive(), "turn complete")
        });

        Ok(ChatReply { session_id, reply })
    }

    /// Create a fresh session and answer with the greeting. Any previous
    /// session for this learner is discarded.
    async fn start_session(&self, learner: &str, profile: &LearnerProfile) -> ChatReply {
        let fingerprint = self.prompt.fingerprint();
        let session = self.fresh_session(learner, profile, &fingerprint);
        let session_id = session.id.clone();

        info!(learner, session_id = %session_id, "session started");
        let greeting = build_greeting(learner, profile);
        self.sessions.insert(session).await;

        ChatReply {
            session_id,
            reply: ParsedReply::text(greeting),
        }
    }

    fn fresh_session(
        &self,
        learner: &str,
        profile: &LearnerProfile,
        fingerprint: &str,
    ) -> TutorSession {
        let mut session = TutorSession::new(learner, profile.clone(), fingerprint);
        for turn in build_initial_history(learner, profile) {
            session.add_turn(turn);
        }
        session
    }

    /// Rebuild a stale session under the current prompt, keeping the learner's
    /// conversation history so the chat continues seamlessly.
    fn rebuild_session(&self, stale: &TutorSession, fingerprint: &str) -> TutorSession {
        let mut session = TutorSession::new(&stale.learner, stale.profile.clone(), fingerprint);
        for turn in &stale.turns {
            session.add_turn(turn.clone());
        }
        session
    }

    fn system_instruction(&self, profile: &LearnerProfile) -> String {
        let plan = load_education_plan(&self.config.education_plan_path);
        let assets = image_assets(&self.config.static_base_url);
        self.prompt.build_system_instruction(profile, &plan, &assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Returns canned replies in order; errors once the script runs out.
    #[derive(Debug)]
    struct ScriptedGenerator {
        replies: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn new(replies: &[&str]) -> Self {
            let mut replies: Vec<String> = replies.iter().map(|r| r.to_string()).collect();
            replies.reverse();
            Self {
                replies: Mutex::new(replies),
            }
        }
    }

    #[async_trait]
    impl Generator for ScriptedGenerator {
        fn id(&self) -> &str {
            "scripted"
        }

        async fn generate(&self, _request: GenerateRequest) -> Result<String, RuntimeError> {
            self.replies
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| RuntimeError::Generator("script exhausted".to_string()))
        }
    }

    fn service(replies: &[&str]) -> TutorService {
        TutorService::new(
            RuntimeConfig::new(),
            PromptConfig::default(),
            Arc::new(ScriptedGenerator::new(replies)),
        )
    }

    #[tokio::test]
    async fn test_start_returns_greeting() {
        let service = service(&[]);
        let profile = LearnerProfile::new().with_answer("certified", "yes");

        let reply = service.handle_message("Anna", &profile, "start").await.unwrap();

        assert!(reply.reply.text_content.contains("Welcome Anna"));
        assert!(reply.reply.interactive_element.is_none());
        assert_eq!(service.sessions().count().await, 1);
    }

    #[tokio::test]
    async fn test_start_replaces_session() {
        let service = service(&[]);
        let profile = LearnerProfile::new();

        let first = service.handle_message("Anna", &profile, "start").await.unwrap();
        let second = service.handle_message("Anna", &profile, "START").await.unwrap();

        assert_ne!(first.session_id, second.session_id);
        assert_eq!(service.sessions().count().await, 1);
    }

    #[tokio::test]
    async fn test_message_is_generated_and_parsed() {
        let raw = "Here is a question.\n```json\n{\"suggestions\": [\"a\", \"b\"]}\n```";
        let service = service(&[raw]);
        let profile = LearnerProfile::new();

        service.handle_message("Anna", &profile, "start").await.unwrap();
        let reply = service.handle_message("Anna", &profile, "continue").await.unwrap();

        assert_eq!(reply.reply.text_content, "Here is a question.");
        let element = reply.reply.interactive_element.unwrap();
        assert_eq!(element.kind.as_str(), "suggestions");
    }

    #[tokio::test]
    async fn test_response_wrapper_is_unwrapped() {
        let service = service(&[r#"{"response": "Well done!"}"#]);
        let profile = LearnerProfile::new();

        service.handle_message("Anna", &profile, "start").await.unwrap();
        let reply = service.handle_message("Anna", &profile, "answer").await.unwrap();

        assert_eq!(reply.reply.text_content, "Well done!");
        assert!(reply.reply.interactive_element.is_none());
    }

    #[tokio::test]
    async fn test_message_without_start_creates_session() {
        let service = service(&["Let's pick up where we left off."]);
        let profile = LearnerProfile::new();

        let reply = service.handle_message("Anna", &profile, "hello").await.unwrap();

        assert_eq!(reply.reply.text_content, "Let's pick up where we left off.");
        assert_eq!(service.sessions().count().await, 1);
    }

    #[tokio::test]
    async fn test_history_accumulates() {
        let service = service(&["first reply", "second reply"]);
        let profile = LearnerProfile::new();

        service.handle_message("Anna", &profile, "start").await.unwrap();
        service.handle_message("Anna", &profile, "one").await.unwrap();
        service.handle_message("Anna", &profile, "two").await.unwrap();

        // greeting + 2 user turns + 2 assistant turns
        let session = service.sessions().get("Anna").await.unwrap();
        assert_eq!(session.turn_count(), 5);
    }

    #[tokio::test]
    async fn test_empty_learner_is_rejected() {
        let service = service(&[]);
        let err = service
            .handle_message("  ", &LearnerProfile::new(), "start")
            .await
            .unwrap_err();
        assert!(matches!(err, RuntimeError::Session(_)));
    }

    #[tokio::test]
    async fn test_generator_failure_propagates() {
        let service = service(&[]);
        let profile = LearnerProfile::new();

        service.handle_message("Anna", &profile, "start").await.unwrap();
        let err = service.handle_message("Anna", &profile, "go").await.unwrap_err();
        assert!(matches!(err, RuntimeError::Generator(_)));
    }
}
