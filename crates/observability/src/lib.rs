//! lexi-observability — shared tracing setup for the lexi backend and CLI.
//!
//! Console logging via `tracing-subscriber` with an `EnvFilter`, configurable
//! programmatically or from environment variables.
//!
//! # Quick Start
//!
//! ```no_run
//! use lexi_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("lexi-backend").with_log_level("info");
//! init(config)?;
//!
//! // Or from LEXI_LOG / RUST_LOG
//! lexi_observability::init_from_env()?;
//!
//! tracing::info!("service started");
//! # Ok::<(), lexi_observability::ObservabilityError>(())
//! ```

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env, is_initialized};
pub use tracing::{record_duration, record_error};

// chat_span! is exported via #[macro_export] as lexi_observability::chat_span!().
