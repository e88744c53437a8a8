//! Canonical sample records for the `seed` command.

use crate::model::StudentDraft;

/// The three sample students loaded by `rosterd seed`.
pub fn sample_drafts() -> Vec<StudentDraft> {
    vec![
        StudentDraft {
            name: "John Doe".to_string(),
            student_id: "ST001".to_string(),
            address: "123 Main St, City".to_string(),
            email: Some("john.doe@example.com".to_string()),
            phone: Some("123-456-7890".to_string()),
        },
        StudentDraft {
            name: "Jane Smith".to_string(),
            student_id: "ST002".to_string(),
            address: "456 Oak Ave, Town".to_string(),
            email: Some("jane.smith@example.com".to_string()),
            phone: Some("987-654-3210".to_string()),
        },
        StudentDraft {
            name: "Alice Johnson".to_string(),
            student_id: "ST003".to_string(),
            address: "789 Pine Rd, Village".to_string(),
            email: Some("alice.johnson@example.com".to_string()),
            phone: Some("555-555-5555".to_string()),
        },
    ]
}
