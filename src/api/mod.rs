//! # REST API Module
//!
//! HTTP surface for student records: error taxonomy with status mapping,
//! response envelopes, the route handlers, and the server wrapper.

pub mod errors;
pub mod response;
pub mod routes;
pub mod server;

pub use errors::{ApiError, ApiResult, ErrorBody};
pub use response::{HealthResponse, MessageResponse, ServiceDescriptor};
pub use routes::{student_routes, ApiState};
pub use server::HttpServer;
