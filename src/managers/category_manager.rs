//! Category Manager for vidmark.
//!
//! Keeps the ordered, duplicate-free list of category names. The sentinel
//! [`ALL_CATEGORIES`] is always first and the fallback category always exists;
//! neither can be removed. Reassigning bookmarks of a removed category is the
//! bookmark store's job, driven by the [`CategoryDeletion`] outcome.

use crate::types::category::{CategoryDeletion, ALL_CATEGORIES};

/// Trait defining category management operations.
pub trait CategoryManagerTrait {
    fn add_category(&mut self, name: &str) -> bool;
    fn remove_category(&mut self, name: &str) -> CategoryDeletion;
    fn contains(&self, name: &str) -> bool;
    fn categories(&self) -> &[String];
    fn fallback(&self) -> &str;
    fn resolve(&self, requested: Option<&str>) -> String;
}

/// In-memory category list.
#[derive(Debug, Clone)]
pub struct CategoryManager {
    names: Vec<String>,
    fallback: String,
}

impl CategoryManager {
    /// Builds a manager from persisted or default names, repairing them as needed:
    /// names are trimmed, blanks and duplicates dropped, the sentinel moved to the
    /// front and the fallback appended if missing.
    pub fn new(names: Vec<String>, fallback: &str) -> Self {
        let fallback = match fallback.trim() {
            "" | ALL_CATEGORIES => "Entertainment".to_string(),
            f => f.to_string(),
        };

        let mut normalized: Vec<String> = vec![ALL_CATEGORIES.to_string()];
        for name in names {
            let name = name.trim();
            if name.is_empty() || normalized.iter().any(|n| n == name) {
                continue;
            }
            normalized.push(name.to_string());
        }
        if !normalized.contains(&fallback) {
            tracing::warn!(fallback = %fallback, "fallback category missing, re-created");
            normalized.push(fallback.clone());
        }

        Self {
            names: normalized,
            fallback,
        }
    }

    /// Whether `name` may be removed at all.
    pub fn is_protected(&self, name: &str) -> bool {
        name == ALL_CATEGORIES || name == self.fallback
    }

    /// Categories a bookmark can be filed under (everything except the sentinel).
    pub fn assignable(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|n| *n != ALL_CATEGORIES)
    }
}

impl CategoryManagerTrait for CategoryManager {
    /// Appends a trimmed name. Returns `false` if it was blank or already present.
    fn add_category(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Removes `name` unless it is protected or unknown.
    ///
    /// The returned `Removed` carries `reassigned: 0`; the caller fills in how many
    /// bookmarks it moved.
    fn remove_category(&mut self, name: &str) -> CategoryDeletion {
        if self.is_protected(name) {
            return CategoryDeletion::Protected;
        }
        match self.names.iter().position(|n| n == name) {
            Some(idx) => {
                self.names.remove(idx);
                CategoryDeletion::Removed { reassigned: 0 }
            }
            None => CategoryDeletion::NotFound,
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    fn categories(&self) -> &[String] {
        &self.names
    }

    fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Maps a requested category onto one a bookmark may carry.
    fn resolve(&self, requested: Option<&str>) -> String {
        match requested.map(str::trim) {
            Some(name) if name != ALL_CATEGORIES && self.contains(name) => name.to_string(),
            _ => self.fallback.clone(),
        }
    }
}
