//! CLI error types.

use thiserror::Error;

use crate::client::ClientError;
use crate::config::ConfigError;
use crate::store::StoreError;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration problem.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Record store failure.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// API client failure.
    #[error("{0}")]
    Client(#[from] ClientError),

    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        CliError::Config {
            message: message.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config { .. } => 1,
            CliError::Store(_) => 2,
            CliError::Client(_) => 3,
            CliError::Io(_) => 4,
            CliError::Json(_) => 5,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config {
            message: err.to_string(),
        }
    }
}
