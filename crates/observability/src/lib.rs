//! Tracing/logging setup shared by staffdesk processes and test harnesses.

pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
/// A malformed environment falls back to the defaults and is reported once
/// the subscriber is up.
pub fn init() {
    match ObservabilityConfig::from_env() {
        Ok(config) => tracing::init_with(&config),
        Err(err) => {
            tracing::init_with(&ObservabilityConfig::default());
            ::tracing::warn!(error = %err, "invalid logging configuration; using defaults");
        }
    }
}
