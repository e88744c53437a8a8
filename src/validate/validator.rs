//! Field-rule validation for create and update bodies.
//!
//! Rules:
//! - `name`: required, minimum 2 characters
//! - `student_id`: required, minimum 5 characters
//! - `address`: required, minimum 5 characters
//! - `email`: optional, must be a syntactically valid address when present
//! - `phone`: optional free-form text
//!
//! The body must be a JSON object. Unknown fields are ignored; a provided
//! field of the wrong type (including explicit null) is a failure. All
//! failures are collected before returning.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::model::{StudentDraft, StudentPatch};

use super::errors::{FieldError, ValidationError};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const MIN_NAME: usize = 2;
const MIN_STUDENT_ID: usize = 5;
const MIN_ADDRESS: usize = 5;

/// Validates a create body and produces the draft to insert.
pub fn draft(body: &Value) -> Result<StudentDraft, ValidationError> {
    let obj = as_object(body)?;
    let mut errors = Vec::new();

    let name = required_text(obj, "name", "Name", MIN_NAME, &mut errors);
    let student_id = required_text(obj, "student_id", "Student ID", MIN_STUDENT_ID, &mut errors);
    let address = required_text(obj, "address", "Address", MIN_ADDRESS, &mut errors);
    let email = optional_email(obj, &mut errors);
    let phone = optional_text(obj, "phone", "Phone", &mut errors);

    match (name, student_id, address) {
        (Some(name), Some(student_id), Some(address)) if errors.is_empty() => Ok(StudentDraft {
            name,
            student_id,
            address,
            email,
            phone,
        }),
        _ => Err(ValidationError::new(errors)),
    }
}

/// Validates an update body. The same field rules apply, but only to the
/// fields the body provides.
pub fn patch(body: &Value) -> Result<StudentPatch, ValidationError> {
    let obj = as_object(body)?;
    let mut errors = Vec::new();

    let name = provided_text(obj, "name", "Name", MIN_NAME, &mut errors);
    let student_id = provided_text(obj, "student_id", "Student ID", MIN_STUDENT_ID, &mut errors);
    let address = provided_text(obj, "address", "Address", MIN_ADDRESS, &mut errors);
    let email = optional_email(obj, &mut errors);
    let phone = optional_text(obj, "phone", "Phone", &mut errors);

    if errors.is_empty() {
        Ok(StudentPatch {
            name,
            student_id,
            address,
            email,
            phone,
        })
    } else {
        Err(ValidationError::new(errors))
    }
}

fn as_object(body: &Value) -> Result<&Map<String, Value>, ValidationError> {
    body.as_object()
        .ok_or_else(|| ValidationError::single("body", "Request body must be a JSON object"))
}

/// A field that must be present on create.
fn required_text(
    obj: &Map<String, Value>,
    field: &str,
    label: &str,
    min: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match obj.get(field) {
        None => {
            errors.push(FieldError::new(field, format!("{} is required", label)));
            None
        }
        Some(value) => checked_text(value, field, label, min, errors),
    }
}

/// A field validated only when the body provides it.
fn provided_text(
    obj: &Map<String, Value>,
    field: &str,
    label: &str,
    min: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    obj.get(field)
        .and_then(|value| checked_text(value, field, label, min, errors))
}

/// An optional free-form text field; no minimum length.
fn optional_text(
    obj: &Map<String, Value>,
    field: &str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    obj.get(field)
        .and_then(|value| checked_text(value, field, label, 0, errors))
}

fn optional_email(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    let value = obj.get("email")?;
    let text = checked_text(value, "email", "Email", 0, errors)?;
    if EMAIL_RE.is_match(&text) {
        Some(text)
    } else {
        errors.push(FieldError::new("email", "Invalid email format"));
        None
    }
}

fn checked_text(
    value: &Value,
    field: &str,
    label: &str,
    min: usize,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let Some(text) = value.as_str() else {
        errors.push(FieldError::new(field, format!("{} must be a string", label)));
        return None;
    };
    if text.chars().count() < min {
        errors.push(FieldError::new(
            field,
            format!("{} must be at least {} characters", label, min),
        ));
        return None;
    }
    Some(text.to_string())
}
