// vidmark Filter Engine
// Derives the visible bookmarks from (collection, selected category, search term).
// Pure functions; input order is preserved.

use serde::{Deserialize, Serialize};

use crate::types::bookmark::VideoBookmark;
use crate::types::category::ALL_CATEGORIES;

/// The user's current view selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkFilter {
    pub category: String,
    pub search_term: String,
}

impl Default for BookmarkFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
        }
    }
}

impl BookmarkFilter {
    pub fn new(category: &str, search_term: &str) -> Self {
        Self {
            category: category.to_string(),
            search_term: search_term.to_string(),
        }
    }

    pub fn matches(&self, bookmark: &VideoBookmark) -> bool {
        matches_category(bookmark, &self.category)
            && matches_search(bookmark, &self.search_term.to_lowercase())
    }

    pub fn apply<'a>(&self, bookmarks: &'a [VideoBookmark]) -> Vec<&'a VideoBookmark> {
        visible(bookmarks, &self.category, &self.search_term)
    }
}

/// Returns the bookmarks passing both the category and the search predicate.
pub fn visible<'a>(
    bookmarks: &'a [VideoBookmark],
    selected_category: &str,
    search_term: &str,
) -> Vec<&'a VideoBookmark> {
    let needle = search_term.to_lowercase();
    bookmarks
        .iter()
        .filter(|b| matches_category(b, selected_category) && matches_search(b, &needle))
        .collect()
}

/// Exact, case-sensitive category match; the sentinel matches everything.
fn matches_category(bookmark: &VideoBookmark, selected: &str) -> bool {
    selected == ALL_CATEGORIES || bookmark.category == selected
}

/// `needle` must already be lowercased. Whitespace is significant.
fn matches_search(bookmark: &VideoBookmark, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let hit = |field: &str| field.to_lowercase().contains(needle);
    hit(&bookmark.title)
        || bookmark.description.as_deref().is_some_and(hit)
        || bookmark.channel.as_deref().is_some_and(hit)
}
