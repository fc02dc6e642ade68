use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    #[error("failed to initialize tracing subscriber: {0}")]
    Init(String),

    #[error("invalid log filter directive: {0}")]
    Filter(String),
}
