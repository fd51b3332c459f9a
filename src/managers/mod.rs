// vidmark state managers
// Managers own the in-memory catalog: bookmarks and their category list.

pub mod bookmark_store;
pub mod category_manager;
