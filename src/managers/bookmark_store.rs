//! Bookmark Store for vidmark.
//!
//! Implements `BookmarkStoreTrait`: the authoritative in-memory catalog of video
//! bookmarks and category names. Every mutation that changes something hands a
//! fresh snapshot to the injected [`PersistenceSink`].

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::managers::category_manager::{CategoryManager, CategoryManagerTrait};
use crate::services::filter_engine;
use crate::services::seed_data;
use crate::services::storage_adapter::{PersistedState, PersistenceSink};
use crate::services::video_metadata;
use crate::types::bookmark::{
    clamp_rating, non_blank, BookmarkDraft, BookmarkPatch, VideoBookmark,
};
use crate::types::category::CategoryDeletion;
use crate::types::errors::BookmarkError;
use crate::types::settings::CatalogDefaults;

/// Trait defining bookmark store operations.
pub trait BookmarkStoreTrait {
    fn add_bookmark(&mut self, draft: BookmarkDraft) -> Result<String, BookmarkError>;
    fn delete_bookmark(&mut self, id: &str) -> bool;
    fn update_bookmark(&mut self, id: &str, patch: BookmarkPatch) -> Result<bool, BookmarkError>;
    fn set_rating(&mut self, id: &str, rating: i64) -> bool;
    fn toggle_rating(&mut self, id: &str, star: i64) -> Option<u8>;
    fn get_bookmark(&self, id: &str) -> Option<&VideoBookmark>;
    fn bookmarks(&self) -> &[VideoBookmark];
    fn bookmark_count(&self) -> usize;
    fn visible(&self, category: &str, search_term: &str) -> Vec<&VideoBookmark>;
    fn categories(&self) -> &[String];
    fn add_category(&mut self, name: &str) -> bool;
    fn delete_category(&mut self, name: &str) -> CategoryDeletion;
}

/// In-memory bookmark store with an injectable persistence sink.
pub struct BookmarkStore {
    bookmarks: Vec<VideoBookmark>,
    categories: CategoryManager,
    sink: Box<dyn PersistenceSink>,
}

impl BookmarkStore {
    /// Creates a store from existing collections.
    ///
    /// Loaded records are repaired so the invariants hold from the start:
    /// duplicate ids get fresh ones, ratings are clamped, categories that no
    /// longer exist fall back and blank optional fields become `None` (a blank
    /// thumbnail is re-derived from a video URL).
    pub fn new(
        bookmarks: Vec<VideoBookmark>,
        categories: CategoryManager,
        sink: Box<dyn PersistenceSink>,
    ) -> Self {
        let mut seen = HashSet::new();
        let bookmarks = bookmarks
            .into_iter()
            .map(|mut b| {
                if !seen.insert(b.id.clone()) {
                    let fresh = Self::fresh_id(&seen);
                    warn!(old = %b.id, new = %fresh, "duplicate bookmark id reassigned");
                    seen.insert(fresh.clone());
                    b.id = fresh;
                }
                b.rating = b.rating.min(crate::types::bookmark::MAX_RATING);
                b.category = categories.resolve(Some(&b.category));
                b.channel = non_blank(b.channel);
                b.description = non_blank(b.description);
                b.duration = non_blank(b.duration);
                b.thumbnail = non_blank(b.thumbnail)
                    .or_else(|| video_metadata::inspect(&b.url).map(|m| m.thumbnail));
                b
            })
            .collect();

        Self {
            bookmarks,
            categories,
            sink,
        }
    }

    /// Builds the store from whatever storage yielded, seeding what is missing.
    pub fn from_persisted(
        state: PersistedState,
        defaults: &CatalogDefaults,
        sink: Box<dyn PersistenceSink>,
    ) -> Self {
        let bookmarks = state.bookmarks.unwrap_or_else(|| {
            if defaults.seed_sample_bookmarks {
                info!("no stored bookmarks, seeding sample catalog");
                seed_data::sample_bookmarks()
            } else {
                Vec::new()
            }
        });
        let names = state
            .categories
            .unwrap_or_else(|| defaults.default_categories.clone());
        let categories = CategoryManager::new(names, &defaults.fallback_category);
        Self::new(bookmarks, categories, sink)
    }

    /// Writes both collections through the sink, regardless of changes.
    pub fn persist_all(&self) {
        self.sink.persist_bookmarks(&self.bookmarks);
        self.sink.persist_categories(self.categories.categories());
    }

    pub fn fallback_category(&self) -> &str {
        self.categories.fallback()
    }

    pub fn category_manager(&self) -> &CategoryManager {
        &self.categories
    }

    fn persist_bookmarks(&self) {
        self.sink.persist_bookmarks(&self.bookmarks);
    }

    fn fresh_id(taken: &HashSet<String>) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !taken.contains(&id) {
                return id;
            }
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == id)
    }

    fn required(field: &str, value: &str) -> Result<String, BookmarkError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(BookmarkError::InvalidInput(format!("{} is required", field)));
        }
        Ok(trimmed.to_string())
    }
}

impl BookmarkStoreTrait for BookmarkStore {
    /// Adds a bookmark at the front of the catalog. Returns the generated ID.
    fn add_bookmark(&mut self, draft: BookmarkDraft) -> Result<String, BookmarkError> {
        let title = Self::required("title", &draft.title)?;
        let url = Self::required("url", &draft.url)?;
        let draft = video_metadata::prefill(draft);

        let taken: HashSet<String> = self.bookmarks.iter().map(|b| b.id.clone()).collect();
        let id = Self::fresh_id(&taken);

        let bookmark = VideoBookmark {
            id: id.clone(),
            title,
            url,
            channel: non_blank(draft.channel),
            description: non_blank(draft.description),
            category: self.categories.resolve(draft.category.as_deref()),
            thumbnail: non_blank(draft.thumbnail),
            duration: non_blank(draft.duration),
            date_added: Utc::now(),
            rating: clamp_rating(draft.rating.unwrap_or(0)),
        };
        debug!(id = %id, category = %bookmark.category, "bookmark added");

        self.bookmarks.insert(0, bookmark);
        self.persist_bookmarks();
        Ok(id)
    }

    /// Removes a bookmark. Returns `false` if no bookmark had that ID.
    fn delete_bookmark(&mut self, id: &str) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.bookmarks.remove(idx);
        debug!(id, "bookmark deleted");
        self.persist_bookmarks();
        true
    }

    /// Merges `patch` into the bookmark. Returns `Ok(false)` for an unknown ID.
    /// An empty patch matches but writes nothing.
    ///
    /// Blank optional values clear the field; blank title or url is rejected.
    fn update_bookmark(&mut self, id: &str, patch: BookmarkPatch) -> Result<bool, BookmarkError> {
        let Some(idx) = self.position(id) else {
            return Ok(false);
        };
        if patch.is_empty() {
            return Ok(true);
        }

        let title = patch.title.as_deref().map(|t| Self::required("title", t)).transpose()?;
        let url = patch.url.as_deref().map(|u| Self::required("url", u)).transpose()?;
        let category = patch
            .category
            .as_deref()
            .map(|c| self.categories.resolve(Some(c)));

        let bookmark = &mut self.bookmarks[idx];
        if let Some(title) = title {
            bookmark.title = title;
        }
        if let Some(url) = url {
            bookmark.url = url;
        }
        if let Some(category) = category {
            bookmark.category = category;
        }
        if patch.channel.is_some() {
            bookmark.channel = non_blank(patch.channel);
        }
        if patch.description.is_some() {
            bookmark.description = non_blank(patch.description);
        }
        if patch.thumbnail.is_some() {
            bookmark.thumbnail = non_blank(patch.thumbnail);
        }
        if patch.duration.is_some() {
            bookmark.duration = non_blank(patch.duration);
        }
        if let Some(rating) = patch.rating {
            bookmark.rating = clamp_rating(rating);
        }

        debug!(id, "bookmark updated");
        self.persist_bookmarks();
        Ok(true)
    }

    /// Sets the rating, clamped to `0..=5`. Returns `false` for an unknown ID.
    fn set_rating(&mut self, id: &str, rating: i64) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.bookmarks[idx].rating = clamp_rating(rating);
        self.persist_bookmarks();
        true
    }

    /// Star-click semantics: clicking the current rating clears it, any other
    /// star sets it. Returns the new rating, or `None` for an unknown ID.
    fn toggle_rating(&mut self, id: &str, star: i64) -> Option<u8> {
        let idx = self.position(id)?;
        let star = clamp_rating(star);
        let current = self.bookmarks[idx].rating;
        let next = if current == star { 0 } else { star };
        self.bookmarks[idx].rating = next;
        self.persist_bookmarks();
        Some(next)
    }

    fn get_bookmark(&self, id: &str) -> Option<&VideoBookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    fn bookmarks(&self) -> &[VideoBookmark] {
        &self.bookmarks
    }

    fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }

    fn visible(&self, category: &str, search_term: &str) -> Vec<&VideoBookmark> {
        filter_engine::visible(&self.bookmarks, category, search_term)
    }

    fn categories(&self) -> &[String] {
        self.categories.categories()
    }

    /// Adds a category. Returns `false` if it was blank or already present.
    fn add_category(&mut self, name: &str) -> bool {
        if !self.categories.add_category(name) {
            return false;
        }
        self.sink.persist_categories(self.categories.categories());
        true
    }

    /// Deletes a category and moves its bookmarks to the fallback category.
    fn delete_category(&mut self, name: &str) -> CategoryDeletion {
        match self.categories.remove_category(name) {
            CategoryDeletion::Removed { .. } => {
                let fallback = self.categories.fallback().to_string();
                let mut reassigned = 0;
                for bookmark in self.bookmarks.iter_mut().filter(|b| b.category == name) {
                    bookmark.category = fallback.clone();
                    reassigned += 1;
                }
                info!(category = name, reassigned, fallback = %fallback, "category deleted");
                self.sink.persist_categories(self.categories.categories());
                if reassigned > 0 {
                    self.persist_bookmarks();
                }
                CategoryDeletion::Removed { reassigned }
            }
            outcome => outcome,
        }
    }
}
