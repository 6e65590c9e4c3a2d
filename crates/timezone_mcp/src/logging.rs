use tracing_subscriber::{EnvFilter, prelude::*};

use crate::core::error::{TimezoneServerError, TimezoneServerResult};

/// Initialize logging based on environment configuration
///
/// Logging stays off unless `RUST_LOG` is set. Output goes to stderr so the
/// stdio transport keeps stdout for protocol messages.
pub fn init_logging() -> TimezoneServerResult<()> {
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }

    let env_filter = EnvFilter::from_default_env();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| TimezoneServerError::LoggingInitialization(e.to_string()))?;

    Ok(())
}
