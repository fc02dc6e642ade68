use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("generator call failed: {0}")]
    Generator(String),

    #[error("generator not found: {0}")]
    GeneratorNotFound(String),

    #[error("session error: {0}")]
    Session(String),

    #[error("prompt error: {0}")]
    Prompt(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] lexi_core::LexiError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_error() {
        let err = RuntimeError::Generator("upstream timeout".to_string());
        assert_eq!(err.to_string(), "generator call failed: upstream timeout");
    }

    #[test]
    fn test_generator_not_found() {
        let err = RuntimeError::GeneratorNotFound("gemini".to_string());
        assert_eq!(err.to_string(), "generator not found: gemini");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err = RuntimeError::from(lexi_core::LexiError::Session("stale".to_string()));
        assert_eq!(err.to_string(), "session error: stale");
    }
}
