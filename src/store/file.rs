//! File-backed store.
//!
//! The whole table is serialized as a JSON snapshot after every successful
//! mutation. The snapshot is written to a sibling temp file and renamed
//! into place, so readers of the path only ever see a complete snapshot.
//! An undecodable snapshot fails `open` explicitly.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::model::{Student, StudentDraft, StudentPatch};

use super::errors::{StoreError, StoreResult};
use super::table::{RowTable, Snapshot};
use super::StudentStore;

/// Durable store persisting a JSON snapshot per mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    table: RwLock<RowTable>,
}

impl FileStore {
    /// Opens the store at `path`, loading the snapshot if one exists.
    /// A missing file starts an empty table; an unreadable one is an error.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let table = match fs::read_to_string(&path) {
            Ok(contents) => {
                let snapshot: Snapshot = serde_json::from_str(&contents)
                    .map_err(|e| StoreError::Corrupt(e.to_string()))?;
                RowTable::from_snapshot(snapshot)?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => RowTable::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drops every row and persists the empty snapshot. The id counter is
    /// kept so ids are never reused.
    pub fn clear(&self) -> StoreResult<()> {
        let mut table = self.write()?;
        table.clear();
        self.persist(&table)
    }

    fn persist(&self, table: &RowTable) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(&table.to_snapshot())
            .map_err(|e| StoreError::Corrupt(format!("snapshot encode: {}", e)))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, RowTable>> {
        self.table.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, RowTable>> {
        self.table.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl StudentStore for FileStore {
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
        let mut table = self.write()?;
        let row = table.insert(draft)?;
        self.persist(&table)?;
        Ok(row)
    }

    fn update(&self, id: i64, patch: StudentPatch) -> StoreResult<Student> {
        let mut table = self.write()?;
        let row = table.update(id, patch)?;
        self.persist(&table)?;
        Ok(row)
    }

    fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        let mut table = self.write()?;
        table.delete(id)?;
        self.persist(&table)
    }
}
