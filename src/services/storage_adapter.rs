//! Storage Adapter for the catalog.
//!
//! Reads and writes the two persisted entries (bookmarks, categories) as JSON
//! through a [`KeyValueStore`]. Load failures degrade to `None`, save failures
//! are logged and swallowed: the in-memory catalog stays authoritative.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::database::KeyValueStore;
use crate::types::bookmark::VideoBookmark;
use crate::types::errors::StorageError;
use crate::types::settings::StorageSettings;

/// Destination for catalog snapshots after each mutation.
pub trait PersistenceSink: Send {
    fn persist_bookmarks(&self, bookmarks: &[VideoBookmark]);
    fn persist_categories(&self, categories: &[String]);
}

/// What was found in storage at startup. `None` means absent or undecodable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    pub bookmarks: Option<Vec<VideoBookmark>>,
    pub categories: Option<Vec<String>>,
}

/// JSON codec over a key-value store, bound to the configured entry keys.
pub struct StorageAdapter {
    store: Box<dyn KeyValueStore>,
    bookmarks_key: String,
    categories_key: String,
}

impl StorageAdapter {
    pub fn new(store: Box<dyn KeyValueStore>, settings: &StorageSettings) -> Self {
        Self {
            store,
            bookmarks_key: settings.bookmarks_key.clone(),
            categories_key: settings.categories_key.clone(),
        }
    }

    pub fn bookmarks_key(&self) -> &str {
        &self.bookmarks_key
    }

    pub fn categories_key(&self) -> &str {
        &self.categories_key
    }

    /// Reads both entries. Each is decoded independently.
    pub fn load(&self) -> PersistedState {
        PersistedState {
            bookmarks: self.load_entry(&self.bookmarks_key),
            categories: self.load_entry(&self.categories_key),
        }
    }

    /// Encodes and writes the bookmark collection, returning any failure.
    pub fn try_save_bookmarks(&self, bookmarks: &[VideoBookmark]) -> Result<(), StorageError> {
        self.write_entry(&self.bookmarks_key, bookmarks)
    }

    /// Encodes and writes the category collection, returning any failure.
    pub fn try_save_categories(&self, categories: &[String]) -> Result<(), StorageError> {
        self.write_entry(&self.categories_key, categories)
    }

    /// Writes the bookmark collection; failures are logged, never raised.
    pub fn save_bookmarks(&self, bookmarks: &[VideoBookmark]) {
        if let Err(e) = self.try_save_bookmarks(bookmarks) {
            error!(key = %self.bookmarks_key, error = %e, "failed to save bookmarks");
        }
    }

    /// Writes the category collection; failures are logged, never raised.
    pub fn save_categories(&self, categories: &[String]) {
        if let Err(e) = self.try_save_categories(categories) {
            error!(key = %self.categories_key, error = %e, "failed to save categories");
        }
    }

    fn load_entry<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key, "no persisted entry");
                return None;
            }
            Err(e) => {
                warn!(key, error = %e, "failed to read persisted entry");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "discarding malformed persisted entry");
                None
            }
        }
    }

    fn write_entry<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        self.store.set_item(key, &json)?;
        debug!(key, bytes = json.len(), "persisted entry");
        Ok(())
    }
}

impl PersistenceSink for StorageAdapter {
    fn persist_bookmarks(&self, bookmarks: &[VideoBookmark]) {
        self.save_bookmarks(bookmarks);
    }

    fn persist_categories(&self, categories: &[String]) {
        self.save_categories(categories);
    }
}
