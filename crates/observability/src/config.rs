//! Logging configuration read from the environment.

use thiserror::Error;

/// Filter directives, as understood by `tracing_subscriber::EnvFilter`.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Output format selector: `json` or `pretty`.
pub const FORMAT_ENV: &str = "STAFFDESK_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable multi-line output for local runs.
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format {0:?} (expected \"json\" or \"pretty\")")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset or blank keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }

        if let Some(raw) = lookup(FORMAT_ENV) {
            config.format = match raw.trim().to_ascii_lowercase().as_str() {
                "" | "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => return Err(ConfigError::UnknownFormat(raw)),
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_when_unset() {
        let config = ObservabilityConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_lookup(lookup(&[
            (FILTER_ENV, "staffdesk_auth=debug"),
            (FORMAT_ENV, "Pretty"),
        ]))
        .unwrap();
        assert_eq!(config.filter, "staffdesk_auth=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn blank_filter_keeps_default() {
        let config = ObservabilityConfig::from_lookup(lookup(&[(FILTER_ENV, "  ")])).unwrap();
        assert_eq!(config.filter, "info");
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = ObservabilityConfig::from_lookup(lookup(&[(FORMAT_ENV, "xml")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownFormat("xml".to_string()));
    }
}
