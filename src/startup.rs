use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Installs the global tracing subscriber.
///
/// The log filter is read from `RUST_LOG`, falling back to `info` when the
/// variable is unset or cannot be parsed.
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::LoggingErr)` - A global subscriber was already set
pub fn init_tracing() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::LoggingErr(e.to_string()))
}
