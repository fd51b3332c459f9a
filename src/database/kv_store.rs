//! Key-value storage backends.
//!
//! The catalog only ever needs string keys mapped to string values, the same
//! contract a browser's local storage offers. [`SqliteKvStore`] persists entries
//! in the `kv_entries` table; [`MemoryKvStore`] keeps them in a shared map.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use rusqlite::{params, OptionalExtension};

use super::connection::Database;
use crate::types::errors::StorageError;

/// Trait defining a string key-value store.
pub trait KeyValueStore: Send {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Key-value store backed by the `kv_entries` SQLite table.
pub struct SqliteKvStore {
    db: Database,
}

impl SqliteKvStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl KeyValueStore for SqliteKvStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let now = chrono::Utc::now().timestamp();
        self.db.connection().execute(
            "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.db
            .connection()
            .execute("DELETE FROM kv_entries WHERE key = ?1", params![key])?;
        Ok(())
    }
}

/// In-memory key-value store.
///
/// Clones share the same entries, so a test can hand one clone to the catalog
/// and inspect or corrupt entries through another. `reject_writes(true)` makes
/// every write fail the way an exhausted browser quota does.
#[derive(Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    writes_rejected: Arc<AtomicBool>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_writes(&self, rejected: bool) {
        self.writes_rejected.store(rejected, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|e| StorageError::DatabaseError(e.to_string()))
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.writes_rejected.load(Ordering::SeqCst) {
            return Err(StorageError::WriteRejected(key.to_string()));
        }
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if self.writes_rejected.load(Ordering::SeqCst) {
            return Err(StorageError::WriteRejected(key.to_string()));
        }
        self.lock()?.remove(key);
        Ok(())
    }
}
