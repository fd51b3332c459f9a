use serde::{Deserialize, Serialize};

/// The pseudo-category meaning "no filter". Always present, never assignable.
pub const ALL_CATEGORIES: &str = "All";

/// Outcome of a category deletion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum CategoryDeletion {
    /// The category was removed and `reassigned` bookmarks moved to the fallback.
    Removed { reassigned: usize },
    /// The sentinel or the fallback category; nothing changed.
    Protected,
    /// No category with that name exists; nothing changed.
    NotFound,
}
