use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexiError {
    #[error("session error: {0}")]
    Session(String),

    #[error("prompt error: {0}")]
    Prompt(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LexiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error() {
        let err = LexiError::Session("no session for learner".to_string());
        assert_eq!(err.to_string(), "session error: no session for learner");
    }

    #[test]
    fn test_prompt_error() {
        let err = LexiError::Prompt("empty section list".to_string());
        assert_eq!(err.to_string(), "prompt error: empty section list");
    }

    #[test]
    fn test_storage_error() {
        let err = LexiError::Storage("insert failed".to_string());
        assert_eq!(err.to_string(), "storage error: insert failed");
    }

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "plan file missing");
        let err = LexiError::from(io_err);
        assert!(err.to_string().contains("plan file missing"));
    }

    #[test]
    fn test_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json");
        let err = LexiError::from(json_err.unwrap_err());
        assert!(err.to_string().contains("expected value"));
    }
}
