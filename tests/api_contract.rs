//! REST Contract Tests
//!
//! Exercises every row of the REST surface through the router, without a
//! network:
//! - create / duplicate-key conflict
//! - id parsing and not-found handling
//! - partial update semantics and timestamp advancement
//! - delete-then-fetch
//! - descriptor, health, and 404 fallback

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use rosterd::api::HttpServer;
use rosterd::store::MemoryStore;
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Test Utilities
// =============================================================================

fn test_router() -> Router {
    HttpServer::new(Arc::new(MemoryStore::new())).router()
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn john_doe() -> Value {
    json!({
        "name": "John Doe",
        "student_id": "ST001",
        "address": "123 Main St, City"
    })
}

fn timestamp(value: &Value, field: &str) -> DateTime<Utc> {
    value[field]
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(|| panic!("missing timestamp field {}", field))
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_returns_created_row() {
    let router = test_router();

    let (status, body) = send(&router, "POST", "/api/students", Some(john_doe())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_i64().unwrap() >= 1);
    assert_eq!(body["name"], "John Doe");
    assert_eq!(body["student_id"], "ST001");
    assert_eq!(
        timestamp(&body, "created_at"),
        timestamp(&body, "updated_at")
    );
}

#[tokio::test]
async fn test_duplicate_student_id_conflicts_and_adds_no_row() {
    let router = test_router();
    send(&router, "POST", "/api/students", Some(john_doe())).await;

    let again = json!({
        "name": "Someone Else",
        "student_id": "ST001",
        "address": "999 Other Rd, Town"
    });
    let (status, body) = send(&router, "POST", "/api/students", Some(again)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Student ID already exists");

    let (_, listing) = send(&router, "GET", "/api/students", None).await;
    assert_eq!(listing.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_validation_collects_every_field_failure() {
    let router = test_router();

    let (status, body) = send(&router, "POST", "/api/students", Some(json!({"name": "J"}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");

    let details = body["details"].as_array().unwrap();
    let fields: Vec<_> = details.iter().map(|d| d["field"].as_str().unwrap()).collect();
    assert_eq!(fields, vec!["name", "student_id", "address"]);
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let router = test_router();

    let mut body = john_doe();
    body["email"] = json!("not-an-email");
    let (status, response) = send(&router, "POST", "/api/students", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["details"][0]["field"], "email");
    assert_eq!(response["details"][0]["message"], "Invalid email format");
}

#[tokio::test]
async fn test_malformed_json_body_is_bad_request() {
    let router = test_router();

    let request = Request::builder()
        .method("POST")
        .uri("/api/students")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Fetch
// =============================================================================

#[tokio::test]
async fn test_list_empty_table_is_empty_array() {
    let router = test_router();

    let (status, body) = send(&router, "GET", "/api/students", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_by_id_returns_the_row() {
    let router = test_router();
    let (_, created) = send(&router, "POST", "/api/students", Some(john_doe())).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&router, "GET", &format!("/api/students/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let router = test_router();

    for bad in ["abc", "1.5", "-1", "0"] {
        let (status, body) = send(&router, "GET", &format!("/api/students/{}", bad), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id {:?}", bad);
        assert_eq!(body["error"], "Invalid ID format");
    }
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let router = test_router();

    let (status, body) = send(&router, "GET", "/api/students/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_merges_only_provided_fields() {
    let router = test_router();
    let (_, created) = send(&router, "POST", "/api/students", Some(john_doe())).await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &router,
        "PUT",
        &format!("/api/students/{}", id),
        Some(json!({"phone": "555-0000"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], created["name"]);
    assert_eq!(updated["address"], created["address"]);
    assert_eq!(updated["phone"], "555-0000");
    assert_eq!(updated["created_at"], created["created_at"]);
    assert!(timestamp(&updated, "updated_at") >= timestamp(&created, "updated_at"));
}

#[tokio::test]
async fn test_update_rejects_student_id_change_but_accepts_echo() {
    let router = test_router();
    let (_, created) = send(&router, "POST", "/api/students", Some(john_doe())).await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/students/{}", id);

    let (status, body) = send(&router, "PUT", &uri, Some(json!({"student_id": "ST999"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "student_id");

    // The locked form field resubmitting its value must pass.
    let (status, _) = send(&router, "PUT", &uri, Some(json!({"student_id": "ST001"}))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_validates_provided_fields() {
    let router = test_router();
    let (_, created) = send(&router, "POST", "/api/students", Some(john_doe())).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        &router,
        "PUT",
        &format!("/api/students/{}", id),
        Some(json!({"name": "J"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["details"][0]["message"],
        "Name must be at least 2 characters"
    );
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let router = test_router();

    let (status, _) = send(
        &router,
        "PUT",
        "/api/students/999",
        Some(json!({"phone": "555-0000"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_confirms_then_fetch_not_found() {
    let router = test_router();
    let (_, created) = send(&router, "POST", "/api/students", Some(john_doe())).await;
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/students/{}", id);

    let (status, body) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student deleted successfully");

    let (status, _) = send(&router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_bad_id_is_bad_request() {
    let router = test_router();

    let (status, _) = send(&router, "DELETE", "/api/students/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let router = test_router();

    let (status, _) = send(&router, "DELETE", "/api/students/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Service surface
// =============================================================================

#[tokio::test]
async fn test_root_serves_descriptor() {
    let router = test_router();

    let (status, body) = send(&router, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student Records API");
    assert_eq!(body["endpoints"]["students"], "/api/students");
}

#[tokio::test]
async fn test_health_probe() {
    let router = test_router();

    let (status, body) = send(&router, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unmatched_path_is_json_not_found() {
    let router = test_router();

    let (status, body) = send(&router, "GET", "/nope", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

// =============================================================================
// End-to-end example flow
// =============================================================================

#[tokio::test]
async fn test_example_lifecycle_flow() {
    let router = test_router();

    // Create.
    let (status, created) = send(&router, "POST", "/api/students", Some(john_doe())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(
        timestamp(&created, "created_at"),
        timestamp(&created, "updated_at")
    );

    // Partial update sets phone only and advances updated_at.
    let (status, updated) = send(
        &router,
        "PUT",
        &format!("/api/students/{}", id),
        Some(json!({"phone": "555-0000"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "John Doe");
    assert_eq!(updated["address"], "123 Main St, City");
    assert_eq!(updated["phone"], "555-0000");
    assert!(timestamp(&updated, "updated_at") >= timestamp(&created, "updated_at"));

    // Delete, then the id is gone.
    let (status, _) = send(&router, "DELETE", &format!("/api/students/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&router, "GET", &format!("/api/students/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
