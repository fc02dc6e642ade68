//! Utility functions for tracing.

/// Create a span for one chat turn.
///
/// Use this around the generate/parse pipeline so every log line carries the
/// learner and session ids.
///
/// # Example
///
/// ```rust
/// use lexi_observability::chat_span;
///
/// let span = chat_span!("kim", "7e6f...");
/// let _guard = span.enter();
/// // ... handle the turn ...
/// ```
#[macro_export]
macro_rules! chat_span {
    ($learner:expr, $session_id:expr) => {
        tracing::info_span!(
            "chat.turn",
            chat.learner = $learner,
            chat.session_id = $session_id,
        )
    };
}

/// Record an error on the current span and emit an error event.
pub fn record_error<E: std::error::Error>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}

/// Record latency/duration on the current span.
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
