//! Tracing/logging initialization.
//!
//! Reads `RUST_LOG` for the filter and `BOOKSTORE_LOG_FORMAT` (`json` or
//! `pretty`) for the output format.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const FORMAT_ENV: &str = "BOOKSTORE_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("invalid log format {0:?} (expected \"json\" or \"pretty\")")]
    InvalidFormat(String),

    #[error("invalid filter directive: {0}")]
    InvalidFilter(String),

    #[error("a global subscriber is already installed")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(ObservabilityError::InvalidFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directive, e.g. `info,bookstore_catalog=debug`.
    pub filter: String,
    pub format: LogFormat,
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            with_target: false,
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> Result<Self, ObservabilityError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ObservabilityError> {
        let mut config = Self::default();
        if let Some(filter) = var(EnvFilter::DEFAULT_ENV).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }
        if let Some(format) = var(FORMAT_ENV) {
            config.format = format.parse()?;
        }
        Ok(config)
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops). Falls back to
/// defaults when the environment holds an invalid configuration.
pub fn init() {
    match TracingConfig::from_env() {
        Ok(config) => {
            let _ = init_with(&config);
        }
        Err(err) => {
            if init_with(&TracingConfig::default()).is_ok() {
                ::tracing::warn!(error = %err, "invalid tracing configuration, using defaults");
            }
        }
    }
}

/// Install a global subscriber built from `config`.
pub fn init_with(config: &TracingConfig) -> Result<(), ObservabilityError> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| ObservabilityError::InvalidFilter(e.to_string()))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(config.with_target);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    installed.map_err(|_| ObservabilityError::AlreadyInitialized)
}
