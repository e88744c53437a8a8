//! # Response Formatting
//!
//! Envelope types for the non-row responses. Row responses serialize the
//! `Student` model directly.

use serde::{Deserialize, Serialize};

/// Confirmation message, e.g. after a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Static descriptor served at the root path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub students: String,
}

impl ServiceDescriptor {
    pub fn current() -> Self {
        Self {
            message: "Student Records API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: Endpoints {
                students: "/api/students".to_string(),
            },
        }
    }
}
