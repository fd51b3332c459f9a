//! App Core for vidmark.
//!
//! Central struct holding the settings, the bookmark store, the persistence
//! worker and the current view selection (category + search term).

use std::path::Path;

use tracing::{debug, info, warn};

use crate::database::{Database, KeyValueStore, MemoryKvStore, SqliteKvStore};
use crate::managers::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::managers::category_manager::{CategoryManager, CategoryManagerTrait};
use crate::services::filter_engine::BookmarkFilter;
use crate::services::persistence_worker::PersistenceWorker;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::storage_adapter::{PersistenceSink, StorageAdapter};
use crate::types::bookmark::VideoBookmark;
use crate::types::category::{CategoryDeletion, ALL_CATEGORIES};
use crate::types::errors::StorageError;
use crate::types::settings::CatalogSettings;

/// Startup progress of the catalog. `load` always ends in `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Uninitialized,
    Loading,
    Ready,
}

/// Stand-in sink until the catalog is loaded. Nothing is persisted before then.
struct NotLoaded;

impl PersistenceSink for NotLoaded {
    fn persist_bookmarks(&self, _: &[VideoBookmark]) {
        debug!("catalog not loaded, bookmark snapshot not persisted");
    }

    fn persist_categories(&self, _: &[String]) {
        debug!("catalog not loaded, category snapshot not persisted");
    }
}

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    store: BookmarkStore,
    filter: BookmarkFilter,
    adapter: Option<StorageAdapter>,
    worker: Option<PersistenceWorker>,
    phase: LoadPhase,
}

impl App {
    /// Opens the catalog stored in `data_dir`.
    ///
    /// Settings come from `<data_dir>/settings.json` (defaults if missing or
    /// unreadable) and the catalog from the SQLite file named there.
    pub fn new(data_dir: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(data_dir);
        let mut settings_engine = Self::settings_engine_for(dir);
        if let Err(e) = settings_engine.load() {
            warn!(error = %e, "unreadable settings, using defaults");
        }
        Self::open(dir, settings_engine)
    }

    /// Settings engine bound to `<data_dir>/settings.json`, not yet loaded.
    pub fn settings_engine_for(data_dir: &Path) -> SettingsEngine {
        let config_path = data_dir.join("settings.json").to_string_lossy().to_string();
        SettingsEngine::new(Some(config_path))
    }

    /// Opens the SQLite catalog in `data_dir` using already loaded settings.
    pub fn open(
        data_dir: &Path,
        settings_engine: SettingsEngine,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let db_path = data_dir.join(&settings_engine.get_settings().storage.database_file);
        let db = Database::open(db_path)?;
        let app = Self::from_parts(settings_engine, Box::new(SqliteKvStore::new(db)))?;
        Ok(app)
    }

    /// A catalog with default settings over a fresh in-memory store.
    pub fn in_memory() -> Result<Self, StorageError> {
        Self::from_parts(SettingsEngine::new(None), Box::new(MemoryKvStore::new()))
    }

    /// Wires and loads the catalog over any key-value store.
    pub fn from_parts(
        settings_engine: SettingsEngine,
        kv_store: Box<dyn KeyValueStore>,
    ) -> Result<Self, StorageError> {
        let mut app = Self::unloaded(settings_engine, kv_store);
        app.load()?;
        Ok(app)
    }

    /// Wires the catalog without reading storage. The store starts empty with
    /// the configured categories, and mutations are not persisted until
    /// [`App::load`] replaces it.
    pub fn unloaded(settings_engine: SettingsEngine, kv_store: Box<dyn KeyValueStore>) -> Self {
        let settings = settings_engine.get_settings().clone();
        let categories = CategoryManager::new(
            settings.catalog.default_categories.clone(),
            &settings.catalog.fallback_category,
        );
        let store = BookmarkStore::new(Vec::new(), categories, Box::new(NotLoaded));

        Self {
            settings_engine,
            store,
            filter: BookmarkFilter::default(),
            adapter: Some(StorageAdapter::new(kv_store, &settings.storage)),
            worker: None,
            phase: LoadPhase::Uninitialized,
        }
    }

    /// Reads persisted state, starts the persistence worker and writes back
    /// whatever was seeded or repaired. Does nothing once the catalog is ready.
    pub fn load(&mut self) -> Result<(), StorageError> {
        let Some(adapter) = self.adapter.take() else {
            return Ok(());
        };
        self.phase = LoadPhase::Loading;
        debug!(phase = ?self.phase, "reading persisted catalog");
        let persisted = adapter.load();

        let worker = PersistenceWorker::spawn(adapter)?;
        let store = BookmarkStore::from_persisted(
            persisted,
            &self.settings_engine.get_settings().catalog,
            Box::new(worker.handle()?),
        );
        store.persist_all();

        self.store = store;
        self.worker = Some(worker);
        if !self.store.category_manager().contains(&self.filter.category) {
            self.filter.category = ALL_CATEGORIES.to_string();
        }
        self.phase = LoadPhase::Ready;
        info!(
            bookmarks = self.store.bookmark_count(),
            categories = self.store.categories().len(),
            "catalog ready"
        );
        Ok(())
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn settings(&self) -> &CatalogSettings {
        self.settings_engine.get_settings()
    }

    pub fn store(&self) -> &BookmarkStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BookmarkStore {
        &mut self.store
    }

    pub fn filter(&self) -> &BookmarkFilter {
        &self.filter
    }

    /// Selects a category to filter by. Unknown names leave the selection as is.
    pub fn select_category(&mut self, name: &str) -> bool {
        if !self.store.category_manager().contains(name) {
            return false;
        }
        self.filter.category = name.to_string();
        true
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.filter.search_term = term.to_string();
    }

    pub fn clear_search(&mut self) {
        self.filter.search_term.clear();
    }

    /// Bookmarks matching the current selection, in catalog order.
    pub fn visible(&self) -> Vec<&VideoBookmark> {
        self.filter.apply(self.store.bookmarks())
    }

    /// Deletes a category; a selection on the removed category reverts to "All".
    pub fn delete_category(&mut self, name: &str) -> CategoryDeletion {
        let outcome = self.store.delete_category(name);
        if matches!(outcome, CategoryDeletion::Removed { .. }) && self.filter.category == name {
            self.filter.category = ALL_CATEGORIES.to_string();
        }
        outcome
    }

    /// Blocks until every queued snapshot has reached storage. Before loading
    /// there is nothing to wait for.
    pub fn flush(&self) -> Result<(), StorageError> {
        match &self.worker {
            Some(worker) => worker.flush(),
            None => Ok(()),
        }
    }

    /// Writes pending snapshots and stops the persistence worker.
    pub fn shutdown(&mut self) {
        if let Some(worker) = self.worker.as_mut() {
            worker.shutdown();
        }
        info!("catalog shut down");
    }
}
