//! RPC method handler for the vidmark JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches each call to the bookmark store, the view
//! selection or the metadata helpers through the `App` struct.

use std::sync::Mutex;

use crate::app::App;
use crate::managers::bookmark_store::BookmarkStoreTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::video_metadata;
use crate::types::bookmark::{BookmarkDraft, BookmarkPatch, VideoBookmark};

use serde_json::{json, Value};

fn str_param<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(|v| v.as_str())
}

fn bookmark_json(bookmark: &VideoBookmark) -> Result<Value, String> {
    serde_json::to_value(bookmark).map_err(|e| e.to_string())
}

fn bookmark_list(bookmarks: &[&VideoBookmark]) -> Result<Value, String> {
    let arr = bookmarks
        .iter()
        .map(|b| bookmark_json(b))
        .collect::<Result<Vec<Value>, String>>()?;
    Ok(Value::Array(arr))
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true, "version": env!("CARGO_PKG_VERSION")})),

        // ─── Bookmarks ───
        "bookmark.add" => {
            let draft: BookmarkDraft =
                serde_json::from_value(params.clone()).map_err(|e| format!("invalid params: {}", e))?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let id = a.store_mut().add_bookmark(draft).map_err(|e| e.to_string())?;
            let added = a.store().get_bookmark(&id).ok_or("bookmark vanished after add")?;
            bookmark_json(added)
        }
        "bookmark.get" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            match a.store().get_bookmark(id) {
                Some(b) => bookmark_json(b),
                None => Ok(Value::Null),
            }
        }
        "bookmark.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let all: Vec<&VideoBookmark> = a.store().bookmarks().iter().collect();
            bookmark_list(&all)
        }
        "bookmark.update" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let patch_val = params.get("patch").cloned().ok_or("missing patch")?;
            let patch: BookmarkPatch =
                serde_json::from_value(patch_val).map_err(|e| format!("invalid patch: {}", e))?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let updated = a.store_mut().update_bookmark(id, patch).map_err(|e| e.to_string())?;
            Ok(json!({"ok": updated}))
        }
        "bookmark.delete" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let removed = a.store_mut().delete_bookmark(id);
            Ok(json!({"ok": removed}))
        }
        "bookmark.rate" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let rating = params.get("rating").and_then(|v| v.as_i64()).ok_or("missing rating")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if !a.store_mut().set_rating(id, rating) {
                return Ok(json!({"ok": false}));
            }
            let stored = a.store().get_bookmark(id).map(|b| b.rating);
            Ok(json!({"ok": true, "rating": stored}))
        }
        "bookmark.toggle_rating" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let star = params.get("star").and_then(|v| v.as_i64()).ok_or("missing star")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            match a.store_mut().toggle_rating(id, star) {
                Some(rating) => Ok(json!({"ok": true, "rating": rating})),
                None => Ok(json!({"ok": false})),
            }
        }

        // ─── Categories ───
        "category.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!(a.store().categories()))
        }
        "category.assignable" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let names: Vec<&str> = a.store().category_manager().assignable().collect();
            Ok(json!(names))
        }
        "category.add" => {
            let name = str_param(params, "name").ok_or("missing name")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let added = a.store_mut().add_category(name);
            Ok(json!({"ok": added}))
        }
        "category.delete" => {
            let name = str_param(params, "name").ok_or("missing name")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let outcome = a.delete_category(name);
            serde_json::to_value(outcome).map_err(|e| e.to_string())
        }

        // ─── View ───
        "view.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.filter()).map_err(|e| e.to_string())
        }
        "view.select_category" => {
            let name = str_param(params, "name").ok_or("missing name")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let selected = a.select_category(name);
            Ok(json!({"ok": selected, "category": a.filter().category}))
        }
        "view.search" => {
            let term = str_param(params, "term").unwrap_or("");
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.set_search_term(term);
            Ok(json!({"ok": true}))
        }
        "view.visible" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            bookmark_list(&a.visible())
        }

        // ─── Video metadata ───
        "video.inspect" => {
            let url = str_param(params, "url").ok_or("missing url")?;
            match video_metadata::inspect(url) {
                Some(meta) => serde_json::to_value(meta).map_err(|e| e.to_string()),
                None => Ok(Value::Null),
            }
        }

        // ─── Catalog ───
        "catalog.flush" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            a.flush().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let settings = a.settings_engine.get_settings();
            serde_json::to_value(settings).map_err(|e| e.to_string())
        }
        // Saved immediately; the running catalog picks them up on the next start.
        "settings.set" => {
            let key = str_param(params, "key").ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "restart_required": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "restart_required": true}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
