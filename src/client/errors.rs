//! Client error types.

use thiserror::Error;

/// Errors raised by the API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Could not reach the server.
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// The server answered with a non-success status.
    #[error("API request failed: {status} - {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client result type.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        ClientError::Connection {
            message: message.into(),
        }
    }

    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of an API failure, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
