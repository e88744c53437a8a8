//! # HTTP Server
//!
//! Router assembly and the serve loop: service descriptor at the root,
//! health probe, student routes under `/api/students`, JSON 404 fallback,
//! CORS, and a request log line per handled request.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ServiceConfig;
use crate::observability::Logger;
use crate::store::StudentStore;

use super::errors::ErrorBody;
use super::response::{HealthResponse, ServiceDescriptor};
use super::routes::{student_routes, ApiState};

/// HTTP server for the student records API.
pub struct HttpServer {
    config: ServiceConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration.
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self::with_config(ServiceConfig::default(), store)
    }

    /// Create a server with custom configuration.
    pub fn with_config(config: ServiceConfig, store: Arc<dyn StudentStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the router with all endpoints.
    fn build_router(config: &ServiceConfig, store: Arc<dyn StudentStore>) -> Router {
        let state = Arc::new(ApiState::new(store));

        // No configured origins means permissive, for development.
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        Logger::warn("CORS_ORIGIN_INVALID", &[("origin", origin)]);
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/", get(service_descriptor))
            .route("/health", get(health))
            .nest("/api/students", student_routes(state))
            .fallback(not_found)
            .layer(middleware::from_fn(log_request))
            .layer(cors)
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing).
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async).
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info("SERVER_START", &[("addr", &addr.to_string())]);

        axum::serve(listener, self.router).await
    }
}

async fn service_descriptor() -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor::current())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Not Found")))
}

/// One log line per handled request.
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    Logger::info(
        "HTTP_REQUEST",
        &[
            ("method", method.as_str()),
            ("path", &path),
            ("status", response.status().as_str()),
        ],
    );

    response
}
