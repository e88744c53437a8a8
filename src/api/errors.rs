//! # REST API Errors
//!
//! Error taxonomy for the API layer. Every variant maps to exactly one
//! HTTP status; internal faults are logged with their detail and surface
//! only a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;
use crate::validate::{FieldError, ValidationError};

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Path id is not a positive integer.
    #[error("Invalid ID format")]
    InvalidId,

    /// Request body could not be read as JSON.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Field rules failed; carries per-field messages.
    #[error("Validation failed")]
    Validation(#[from] ValidationError),

    /// No row with the requested id.
    #[error("Student not found")]
    NotFound,

    /// Business key already taken.
    #[error("Student ID already exists")]
    DuplicateStudentId,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unexpected store or transport fault. The detail is logged, never
    /// sent to the caller.
    #[error("Internal Server Error")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::DuplicateStudentId => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::DuplicateStudentId(_) => ApiError::DuplicateStudentId,
            StoreError::ImmutableField(field) => ApiError::Validation(ValidationError::single(
                field,
                "Student ID cannot be changed",
            )),
            StoreError::Corrupt(_) | StoreError::LockPoisoned | StoreError::Io(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Validation(validation) => Self {
                error: err.to_string(),
                details: Some(validation.errors.clone()),
            },
            _ => Self::new(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            Logger::error("API_INTERNAL_ERROR", &[("detail", detail)]);
        }
        let status = self.status_code();
        let body = Json(ErrorBody::from(&self));
        (status, body).into_response()
    }
}
