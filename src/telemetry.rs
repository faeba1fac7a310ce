//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The fallback log level could not be parsed as a filter directive.
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        /// The rejected directive.
        value: String,
        /// The parser error.
        #[source]
        source: ParseError,
    },

    /// A global subscriber was already installed.
    #[error("telemetry error: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Builds the log filter, preferring `RUST_LOG` over `log_level`.
pub fn env_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(log_level).map_err(|source| TelemetryError::EnvFilter {
            value: log_level.to_string(),
            source,
        }),
    }
}

/// Installs a compact formatting subscriber as the global default.
///
/// `RUST_LOG` wins when set; otherwise `log_level` is used as the filter.
/// Record lifecycle events are logged under the `audit` target, so
/// `RUST_LOG=audit=info` isolates them.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level)?)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
