//! Request body validation.
//!
//! Explicit validation functions, one per write operation. Validation runs
//! before any store access and collects every field failure so the caller
//! gets the full list in one response.

mod errors;
mod validator;

pub use errors::{FieldError, ValidationError};
pub use validator::{draft, patch};
