//! Logging setup.
//!
//! Events go to stderr so the session transcript on stdout stays clean.
//! `RUST_LOG` takes precedence over the configured level.

use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogConfig;
use crate::error::{DictError, DictResult};

/// Installs the global tracing subscriber described by `config`.
pub fn init_logging(config: &LogConfig) -> DictResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let result = if config.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_file(config.source_location)
                    .with_line_number(config.source_location),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_file(config.source_location)
                    .with_line_number(config.source_location),
            )
            .try_init()
    };

    result.map_err(|e| DictError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}
