//! # Student Routes
//!
//! The five CRUD handlers. Each one validates before it touches the
//! store: id parsing first, then body rules, then existence or uniqueness
//! checks, then the single-row store call.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use crate::model::Student;
use crate::store::StudentStore;
use crate::validate;

use super::errors::{ApiError, ApiResult};
use super::response::MessageResponse;

/// State shared across handlers.
pub struct ApiState {
    pub store: Arc<dyn StudentStore>,
}

impl ApiState {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }
}

/// Create the student routes, nested by the server under `/api/students`.
pub fn student_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .with_state(state)
}

/// Parse a path id; anything but a positive integer is rejected before
/// the store is touched.
fn parse_id(raw: &str) -> ApiResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::InvalidId),
    }
}

/// Unwrap the body extraction, mapping JSON failures to a 400.
fn parse_body(body: Result<Json<Value>, JsonRejection>) -> ApiResult<Value> {
    let Json(value) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    Ok(value)
}

async fn list_students(State(state): State<Arc<ApiState>>) -> ApiResult<Json<Vec<Student>>> {
    Ok(Json(state.store.list_all()?))
}

async fn get_student(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Student>> {
    let id = parse_id(&id)?;
    Ok(Json(state.store.get_by_id(id)?))
}

async fn create_student(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Student>)> {
    let body = parse_body(body)?;
    let draft = validate::draft(&body)?;

    if state.store.find_by_student_id(&draft.student_id)?.is_some() {
        return Err(ApiError::DuplicateStudentId);
    }

    let row = state.store.insert(draft)?;
    Ok((StatusCode::CREATED, Json(row)))
}

async fn update_student(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Student>> {
    let id = parse_id(&id)?;
    let body = parse_body(body)?;
    let patch = validate::patch(&body)?;

    // Existence first so an unknown id is a 404 even with a bad patch
    // target.
    state.store.get_by_id(id)?;

    let row = state.store.update(id, patch)?;
    Ok(Json(row))
}

async fn delete_student(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;

    state.store.get_by_id(id)?;
    state.store.delete_by_id(id)?;

    Ok(Json(MessageResponse::new("Student deleted successfully")))
}
