//! Store error types.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row with the requested id.
    #[error("Student not found")]
    NotFound,

    /// Business key already present on a live row.
    #[error("Student ID '{0}' already exists")]
    DuplicateStudentId(String),

    /// A patch attempted to change an immutable field.
    #[error("Field '{0}' is immutable")]
    ImmutableField(&'static str),

    /// A snapshot on disk could not be decoded. Corruption is reported,
    /// never silently ignored.
    #[error("Snapshot corrupt: {0}")]
    Corrupt(String),

    /// Interior lock was poisoned by a panicking writer.
    #[error("Store lock poisoned")]
    LockPoisoned,

    /// Underlying filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_the_key() {
        let err = StoreError::DuplicateStudentId("ST001".to_string());
        assert!(err.to_string().contains("ST001"));
    }

    #[test]
    fn test_immutable_message_names_the_field() {
        let err = StoreError::ImmutableField("student_id");
        assert!(err.to_string().contains("student_id"));
    }
}
