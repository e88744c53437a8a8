//! In-memory row table shared by both store implementations.
//!
//! The table owns the row semantics: id assignment, business-key
//! uniqueness, field merge, timestamp handling. Callers hold the store's
//! lock for the full operation, so each method sees and leaves a
//! consistent table.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::{Student, StudentDraft, StudentPatch};

use super::errors::{StoreError, StoreResult};

/// The student table plus its id allocation counter.
///
/// `next_id` only ever grows, including across `clear`, so surrogate keys
/// are never reused.
#[derive(Debug)]
pub(crate) struct RowTable {
    rows: BTreeMap<i64, Student>,
    next_id: i64,
}

/// On-disk form of the table.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Snapshot {
    pub next_id: i64,
    pub rows: Vec<Student>,
}

impl RowTable {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn from_snapshot(snapshot: Snapshot) -> StoreResult<Self> {
        let mut rows = BTreeMap::new();
        let mut max_id = 0;
        for row in snapshot.rows {
            max_id = max_id.max(row.id);
            if rows.insert(row.id, row).is_some() {
                return Err(StoreError::Corrupt("duplicate row id".to_string()));
            }
        }
        if snapshot.next_id <= max_id {
            return Err(StoreError::Corrupt(format!(
                "next_id {} not above max row id {}",
                snapshot.next_id, max_id
            )));
        }
        Ok(Self {
            rows,
            next_id: snapshot.next_id,
        })
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            next_id: self.next_id,
            rows: self.rows.values().cloned().collect(),
        }
    }

    pub fn list(&self) -> Vec<Student> {
        self.rows.values().cloned().collect()
    }

    pub fn get(&self, id: i64) -> StoreResult<Student> {
        self.rows.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    pub fn find_by_student_id(&self, student_id: &str) -> Option<Student> {
        self.rows
            .values()
            .find(|r| r.student_id == student_id)
            .cloned()
    }

    pub fn insert(&mut self, draft: StudentDraft) -> StoreResult<Student> {
        if self.find_by_student_id(&draft.student_id).is_some() {
            return Err(StoreError::DuplicateStudentId(draft.student_id));
        }

        let id = self.next_id;
        self.next_id += 1;

        let now = Utc::now();
        let row = Student {
            id,
            name: draft.name,
            student_id: draft.student_id,
            address: draft.address,
            email: draft.email,
            phone: draft.phone,
            created_at: now,
            updated_at: now,
        };
        self.rows.insert(id, row.clone());
        Ok(row)
    }

    pub fn update(&mut self, id: i64, patch: StudentPatch) -> StoreResult<Student> {
        let row = self.rows.get_mut(&id).ok_or(StoreError::NotFound)?;

        if let Some(student_id) = &patch.student_id {
            if *student_id != row.student_id {
                return Err(StoreError::ImmutableField("student_id"));
            }
        }

        if let Some(name) = patch.name {
            row.name = name;
        }
        if let Some(address) = patch.address {
            row.address = address;
        }
        if let Some(email) = patch.email {
            row.email = Some(email);
        }
        if let Some(phone) = patch.phone {
            row.phone = Some(phone);
        }

        // Never moves backwards, even if the wall clock does.
        row.updated_at = row.updated_at.max(Utc::now());

        Ok(row.clone())
    }

    pub fn delete(&mut self, id: i64) -> StoreResult<()> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    /// Drops every row but keeps the id counter.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
