//! Tracing subscriber setup.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize tracing for the process.
///
/// Safe to call more than once; only the first call installs the subscriber.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let directive = if config.enable_console {
        config.log_level.as_deref().unwrap_or("info")
    } else {
        "off"
    };
    let filter =
        EnvFilter::try_new(directive).map_err(|e| ObservabilityError::Filter(e.to_string()))?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ObservabilityError::Init(e.to_string()))?;

    let _ = INITIALIZED.set(());
    tracing::debug!(
        service = %config.service_name,
        version = config.service_version.as_deref().unwrap_or("unknown"),
        "tracing initialized"
    );
    Ok(())
}

/// Initialize tracing from environment variables (`LEXI_LOG`/`RUST_LOG`).
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}

/// Whether tracing has been initialized in this process.
pub fn is_initialized() -> bool {
    INITIALIZED.get().is_some()
}
