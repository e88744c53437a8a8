//! In-memory store.

use std::sync::RwLock;

use crate::model::{Student, StudentDraft, StudentPatch};

use super::errors::{StoreError, StoreResult};
use super::table::RowTable;
use super::StudentStore;

/// Volatile store backed by a row table behind an RwLock.
pub struct MemoryStore {
    table: RwLock<RowTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(RowTable::new()),
        }
    }

    /// Drops every row. The id counter is kept so ids are never reused.
    pub fn clear(&self) -> StoreResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, RowTable>> {
        self.table.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, RowTable>> {
        self.table.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentStore for MemoryStore {
    fn list_all(&self) -> StoreResult<Vec<Student>> {
        Ok(self.read()?.list())
    }

    fn get_by_id(&self, id: i64) -> StoreResult<Student> {
        self.read()?.get(id)
    }

    fn find_by_student_id(&self, student_id: &str) -> StoreResult<Option<Student>> {
        Ok(self.read()?.find_by_student_id(student_id))
    }

    fn insert(&self, draft: StudentDraft) -> StoreResult<Student> {
        self.write()?.insert(draft)
    }

    fn update(&self, id: i64, patch: StudentPatch) -> StoreResult<Student> {
        self.write()?.update(id, patch)
    }

    fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        self.write()?.delete(id)
    }
}
