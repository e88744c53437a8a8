//! Record store for student rows.
//!
//! One trait, two implementations: `MemoryStore` for tests and embedded
//! use, `FileStore` for the serving path. Both enforce the row invariants
//! (business-key uniqueness, immutable `student_id`, monotonic
//! `updated_at`, ids never reused) behind a single lock per operation.

mod errors;
mod file;
mod memory;
pub mod seed;
mod table;

pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::model::{Student, StudentDraft, StudentPatch};

/// Single-row operations over the student table.
pub trait StudentStore: Send + Sync {
    /// All rows. An empty table yields an empty vec.
    fn list_all(&self) -> StoreResult<Vec<Student>>;

    /// The row with the given surrogate key.
    fn get_by_id(&self, id: i64) -> StoreResult<Student>;

    /// Looks a row up by its business key.
    fn find_by_student_id(&self, student_id: &str) -> StoreResult<Option<Student>>;

    /// Persists a new row with a freshly assigned id and timestamps.
    fn insert(&self, draft: StudentDraft) -> StoreResult<Student>;

    /// Merges the provided fields into an existing row and advances
    /// `updated_at`.
    fn update(&self, id: i64, patch: StudentPatch) -> StoreResult<Student>;

    /// Removes a row permanently.
    fn delete_by_id(&self, id: i64) -> StoreResult<()>;
}
