//! Error types for the CLI.

use crate::config::ConfigError;

/// CLI errors. Any of these ends the run with exit code 2.
///
/// Failed validation is not an error here: it is a normal report with
/// exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
