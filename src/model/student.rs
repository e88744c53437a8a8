//! Student record and payload types.
//!
//! `Student` is the persisted row. `StudentDraft` carries the fields a
//! caller supplies on create; `StudentPatch` carries the subset supplied on
//! update. Surrogate `id` and both timestamps are always assigned by the
//! store, never by the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Surrogate key, assigned on creation, never reused.
    pub id: i64,
    pub name: String,
    /// Business key, unique across all live rows, immutable after creation.
    pub student_id: String,
    pub address: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub name: String,
    pub student_id: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Partial update payload. Omitted fields retain their stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Accepted only when it echoes the stored value; the business key is
    /// immutable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_serializes_only_provided_fields() {
        let patch = StudentPatch {
            phone: Some("555-0000".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&patch).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["phone"], "555-0000");
    }

    #[test]
    fn test_draft_omits_absent_optionals() {
        let draft = StudentDraft {
            name: "John Doe".to_string(),
            student_id: "ST001".to_string(),
            address: "123 Main St, City".to_string(),
            email: None,
            phone: None,
        };

        let json = serde_json::to_value(&draft).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
    }

    #[test]
    fn test_student_roundtrips_through_json() {
        let row = Student {
            id: 7,
            name: "Jane Smith".to_string(),
            student_id: "ST002".to_string(),
            address: "456 Oak Ave, Town".to_string(),
            email: Some("jane.smith@example.com".to_string()),
            phone: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&row).unwrap();
        let back: Student = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
