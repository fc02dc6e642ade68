//! Runtime configuration for the tutoring backend.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Sampling parameters forwarded to the generator on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 8192,
        }
    }
}

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Generator model to request.
    pub model: String,
    /// Sampling parameters.
    pub generation: GenerationConfig,
    /// Path to the study-plan text spliced into the system instruction.
    pub education_plan_path: PathBuf,
    /// Base URL under which image assets are served.
    pub static_base_url: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            generation: GenerationConfig::default(),
            education_plan_path: PathBuf::from("education_plan.txt"),
            static_base_url: "http://localhost:10000/static".to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.generation.max_output_tokens = max;
        self
    }

    pub fn with_education_plan_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.education_plan_path = path.into();
        self
    }

    pub fn with_static_base_url(mut self, url: impl Into<String>) -> Self {
        self.static_base_url = url.into();
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(model) = std::env::var("LEXI_MODEL") {
            config.model = model;
        }

        if let Ok(max_tokens) = std::env::var("LEXI_MAX_TOKENS") {
            if let Ok(val) = max_tokens.parse::<u32>() {
                config.generation.max_output_tokens = val;
            }
        }

        if let Ok(temperature) = std::env::var("LEXI_TEMPERATURE") {
            if let Ok(val) = temperature.parse::<f32>() {
                config.generation.temperature = val;
            }
        }

        if let Ok(path) = std::env::var("LEXI_EDUCATION_PLAN") {
            config.education_plan_path = PathBuf::from(path);
        }

        if let Ok(url) = std::env::var("LEXI_STATIC_URL") {
            config.static_base_url = url;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_defaults() {
        let gen = GenerationConfig::default();
        assert_eq!(gen.temperature, 1.0);
        assert_eq!(gen.top_p, 0.95);
        assert_eq!(gen.top_k, 40);
        assert_eq!(gen.max_output_tokens, 8192);
    }

    #[test]
    fn test_runtime_config_new() {
        let config = RuntimeConfig::new();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.education_plan_path, PathBuf::from("education_plan.txt"));
    }

    #[test]
    fn test_runtime_config_builder() {
        let config = RuntimeConfig::new()
            .with_model("gemini-2.5-pro")
            .with_max_output_tokens(4096)
            .with_education_plan_path("/tmp/plan.txt")
            .with_static_base_url("https://tutor.example/static");

        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.generation.max_output_tokens, 4096);
        assert_eq!(config.education_plan_path, PathBuf::from("/tmp/plan.txt"));
        assert_eq!(config.static_base_url, "https://tutor.example/static");
    }
}
