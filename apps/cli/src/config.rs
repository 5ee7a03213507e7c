//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// How the JSON report is laid out on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    #[default]
    Pretty,
    Compact,
}

impl FromStr for OutputStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(OutputStyle::Pretty),
            "compact" => Ok(OutputStyle::Compact),
            _ => Err(ConfigError::InvalidValue("STOCKROOM_OUTPUT".to_string())),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// tracing filter directive (e.g. "info", "stockroom=debug")
    pub log_filter: String,

    /// JSON report layout
    pub output: OutputStyle,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: "warn".to_string(),
            output: OutputStyle::Pretty,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let log_filter = lookup("STOCKROOM_LOG").unwrap_or(defaults.log_filter);
        if log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue("STOCKROOM_LOG".to_string()));
        }

        let output = match lookup("STOCKROOM_OUTPUT") {
            Some(value) => value.parse()?,
            None => defaults.output,
        };

        let config = CliConfig { log_filter, output };
        config.env_filter()?;
        Ok(config)
    }

    /// Builds the tracing filter from `log_filter`.
    ///
    /// Fails on any malformed directive instead of skipping it.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter)
            .map_err(|_| ConfigError::InvalidValue("STOCKROOM_LOG".to_string()))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
