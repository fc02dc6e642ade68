//! Generator trait and registry.
//!
//! The tutoring service talks to a text generator through this seam; the
//! concrete backend (hosted model, local model, scripted test double) is
//! chosen at startup.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use lexi_core::Turn;

use crate::config::GenerationConfig;
use crate::error::RuntimeError;

/// Everything a generator needs to produce the next tutor reply.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Assembled system instruction for this learner.
    pub system_instruction: String,
    /// Conversation so far, oldest first.
    pub history: Vec<Turn>,
    /// The learner message being answered.
    pub message: String,
    /// Sampling parameters.
    pub generation: GenerationConfig,
}

/// A text generation backend.
#[async_trait]
pub trait Generator: Send + Sync + std::fmt::Debug {
    /// Stable identifier, e.g. `"gemini"`.
    fn id(&self) -> &str;

    /// Produce the raw reply text for the request.
    async fn generate(&self, request: GenerateRequest) -> Result<String, RuntimeError>;
}

/// Registry of generator implementations, keyed by generator ID.
#[derive(Default, Clone)]
pub struct GeneratorRegistry {
    generators: HashMap<String, Arc<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator under its own ID. Returns `self` for chaining.
    pub fn register<G: Generator + 'static>(mut self, generator: G) -> Self {
        self.generators
            .insert(generator.id().to_string(), Arc::new(generator));
        self
    }

    /// Look up a generator by ID.
    pub fn get(&self, id: &str) -> Result<Arc<dyn Generator>, RuntimeError> {
        self.generators
            .get(id)
            .cloned()
            .ok_or_else(|| RuntimeError::GeneratorNotFound(id.to_string()))
    }

    /// List all registered generator IDs.
    pub fn list(&self) -> Vec<String> {
        self.generators.keys().cloned().collect()
    }
}
