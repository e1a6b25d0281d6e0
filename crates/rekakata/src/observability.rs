//! Logging setup.

use crate::Settings;
use rekakata_error::{ConfigError, RekaResult};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `settings.log_level`. Logs go to
/// stderr, as JSON when `settings.json_logs` is set.
///
/// # Errors
///
/// Returns a configuration error for an unparseable log filter or when a
/// subscriber is already installed.
pub fn init_logging(settings: &Settings) -> RekaResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .map_err(|e| ConfigError::new(format!("Invalid log level '{}': {}", settings.log_level, e)))?;

    let fmt_layer = if settings.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install subscriber: {}", e)))?;

    Ok(())
}
