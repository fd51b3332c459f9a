use serde::{Deserialize, Serialize};

/// Top-level catalog settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogSettings {
    pub storage: StorageSettings,
    pub catalog: CatalogDefaults,
    pub logging: LoggingSettings,
}

/// Where and under which keys the catalog is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// SQLite file name, relative to the data directory.
    pub database_file: String,
    pub bookmarks_key: String,
    pub categories_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_file: "vidmark.db".to_string(),
            bookmarks_key: "bookmarks".to_string(),
            categories_key: "categories".to_string(),
        }
    }
}

/// Defaults applied when the catalog is created or normalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogDefaults {
    /// Category that receives bookmarks whose category was deleted.
    pub fallback_category: String,
    pub default_categories: Vec<String>,
    /// Whether an empty catalog is seeded with the sample bookmarks.
    pub seed_sample_bookmarks: bool,
}

impl Default for CatalogDefaults {
    fn default() -> Self {
        Self {
            fallback_category: "Entertainment".to_string(),
            default_categories: Self::builtin_categories(),
            seed_sample_bookmarks: true,
        }
    }
}

impl CatalogDefaults {
    /// Returns the built-in category list, sentinel first.
    pub fn builtin_categories() -> Vec<String> {
        ["All", "Music", "Tech", "Gaming", "Education", "Entertainment"]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
