//! Unit tests for the RPC handler: all JSON-RPC methods dispatched by `handle_method`.
//!
//! These tests exercise every RPC method through the same code path used by the
//! real `vidmark-rpc` binary, using a temporary on-disk SQLite database.

use std::sync::Mutex;

use serde_json::{json, Value};
use tempfile::TempDir;

use vidmark::app::App;
use vidmark::managers::bookmark_store::BookmarkStoreTrait;
use vidmark::rpc_handler::handle_method;

/// Create a fresh App backed by a temp directory.
fn setup() -> (Mutex<App>, TempDir) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let app = App::new(tmp.path().to_str().unwrap()).expect("Failed to init App");
    (Mutex::new(app), tmp)
}

fn call(app: &Mutex<App>, method: &str, params: Value) -> Value {
    handle_method(app, method, &params).unwrap_or_else(|e| panic!("{} failed: {}", method, e))
}

fn visible_ids(app: &Mutex<App>) -> Vec<String> {
    call(app, "view.visible", json!({}))
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap().to_string())
        .collect()
}

// ─── Ping / unknown ───

#[test]
fn test_ping() {
    let (app, _tmp) = setup();
    let res = call(&app, "ping", json!({}));
    assert_eq!(res["pong"], true);
}

#[test]
fn test_unknown_method_returns_error() {
    let (app, _tmp) = setup();
    let res = handle_method(&app, "nonexistent.method", &json!({}));
    assert!(res.unwrap_err().contains("unknown method"));
}

// ─── Bookmarks ───

#[test]
fn test_bookmark_add_returns_camel_case_record() {
    let (app, _tmp) = setup();
    let res = call(
        &app,
        "bookmark.add",
        json!({"title": "Lo-fi beats", "url": "https://youtu.be/jfKfPfyJRdk", "category": "Music", "rating": 7}),
    );

    assert_eq!(res["title"], "Lo-fi beats");
    assert_eq!(res["category"], "Music");
    assert_eq!(res["rating"], 5);
    assert_eq!(
        res["thumbnail"],
        "https://img.youtube.com/vi/jfKfPfyJRdk/maxresdefault.jpg"
    );
    assert!(res["dateAdded"].is_string());

    let list = call(&app, "bookmark.list", json!({}));
    assert_eq!(list.as_array().unwrap().len(), 4);
    assert_eq!(list[0]["id"], res["id"]);
}

#[test]
fn test_bookmark_add_rejects_missing_title() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "bookmark.add", &json!({"url": "https://example.com"}))
        .unwrap_err();
    assert!(err.contains("title is required"));
}

#[test]
fn test_bookmark_get() {
    let (app, _tmp) = setup();
    let res = call(&app, "bookmark.get", json!({"id": "2"}));
    assert_eq!(res["channel"], "Traversy Media");
    assert_eq!(call(&app, "bookmark.get", json!({"id": "zzz"})), Value::Null);
    assert!(handle_method(&app, "bookmark.get", &json!({})).is_err());
}

#[test]
fn test_bookmark_update_and_delete() {
    let (app, _tmp) = setup();
    let res = call(
        &app,
        "bookmark.update",
        json!({"id": "1", "patch": {"title": "React Crash Course", "duration": ""}}),
    );
    assert_eq!(res, json!({"ok": true}));

    let updated = call(&app, "bookmark.get", json!({"id": "1"}));
    assert_eq!(updated["title"], "React Crash Course");
    assert!(updated.get("duration").is_none());

    assert_eq!(call(&app, "bookmark.delete", json!({"id": "1"})), json!({"ok": true}));
    assert_eq!(call(&app, "bookmark.delete", json!({"id": "1"})), json!({"ok": false}));
    assert!(handle_method(&app, "bookmark.update", &json!({"id": "2"})).is_err());
}

#[test]
fn test_bookmark_rate_and_toggle() {
    let (app, _tmp) = setup();
    assert_eq!(
        call(&app, "bookmark.rate", json!({"id": "1", "rating": -3})),
        json!({"ok": true, "rating": 0})
    );
    assert_eq!(
        call(&app, "bookmark.rate", json!({"id": "1", "rating": 9})),
        json!({"ok": true, "rating": 5})
    );
    assert_eq!(
        call(&app, "bookmark.toggle_rating", json!({"id": "1", "star": 5})),
        json!({"ok": true, "rating": 0})
    );
    assert_eq!(
        call(&app, "bookmark.rate", json!({"id": "nope", "rating": 2})),
        json!({"ok": false})
    );
    assert!(handle_method(&app, "bookmark.rate", &json!({"id": "1"})).is_err());
}

// ─── Categories and view ───

#[test]
fn test_category_add_list_delete() {
    let (app, _tmp) = setup();
    assert_eq!(call(&app, "category.add", json!({"name": "Podcasts"})), json!({"ok": true}));
    assert_eq!(call(&app, "category.add", json!({"name": "Podcasts"})), json!({"ok": false}));

    let list = call(&app, "category.list", json!({}));
    assert_eq!(list[0], "All");
    assert_eq!(list.as_array().unwrap().last().unwrap(), "Podcasts");

    assert_eq!(
        call(&app, "category.delete", json!({"name": "All"})),
        json!({"status": "protected"})
    );
    assert_eq!(
        call(&app, "category.delete", json!({"name": "Nope"})),
        json!({"status": "not_found"})
    );
}

#[test]
fn test_example_scenario_through_rpc() {
    let (app, _tmp) = setup();
    assert_eq!(
        call(&app, "category.delete", json!({"name": "Tech"})),
        json!({"status": "removed", "reassigned": 2})
    );
    assert_eq!(call(&app, "bookmark.get", json!({"id": "1"}))["category"], "Entertainment");
    assert_eq!(call(&app, "bookmark.get", json!({"id": "2"}))["category"], "Entertainment");

    let res = call(&app, "view.select_category", json!({"name": "Music"}));
    assert_eq!(res, json!({"ok": true, "category": "Music"}));
    assert_eq!(visible_ids(&app), vec!["3"]);
}

#[test]
fn test_view_search_and_get() {
    let (app, _tmp) = setup();
    call(&app, "view.search", json!({"term": "mosh"}));
    assert_eq!(visible_ids(&app), vec!["1"]);
    assert_eq!(
        call(&app, "view.get", json!({})),
        json!({"category": "All", "searchTerm": "mosh"})
    );

    let res = call(&app, "view.select_category", json!({"name": "Nope"}));
    assert_eq!(res, json!({"ok": false, "category": "All"}));

    call(&app, "view.search", json!({}));
    assert_eq!(visible_ids(&app).len(), 3);
}

// ─── Video / catalog / settings ───

#[test]
fn test_video_inspect() {
    let (app, _tmp) = setup();
    let res = call(&app, "video.inspect", json!({"url": "https://youtu.be/dQw4w9WgXcQ"}));
    assert_eq!(res["videoId"], "dQw4w9WgXcQ");
    assert_eq!(
        call(&app, "video.inspect", json!({"url": "https://example.com"})),
        Value::Null
    );
}

#[test]
fn test_catalog_flush_persists_for_next_start() {
    let (app, tmp) = setup();
    call(&app, "bookmark.delete", json!({"id": "3"}));
    assert_eq!(call(&app, "catalog.flush", json!({})), json!({"ok": true}));
    app.lock().unwrap().shutdown();

    let reopened = App::new(tmp.path().to_str().unwrap()).unwrap();
    assert_eq!(reopened.store().bookmark_count(), 2);
    assert!(reopened.store().get_bookmark("3").is_none());
}

#[test]
fn test_settings_get() {
    let (app, _tmp) = setup();
    let res = call(&app, "settings.get", json!({}));
    assert_eq!(res["catalog"]["fallback_category"], "Entertainment");
    assert_eq!(res["storage"]["bookmarks_key"], "bookmarks");
}

#[test]
fn test_settings_set_is_saved_and_applies_on_next_start() {
    let (app, tmp) = setup();
    let res = call(
        &app,
        "settings.set",
        json!({"key": "catalog.fallback_category", "value": "Misc"}),
    );
    assert_eq!(res, json!({"ok": true, "restart_required": true}));
    assert_eq!(
        call(&app, "settings.get", json!({}))["catalog"]["fallback_category"],
        "Misc"
    );
    // The running catalog keeps the fallback it started with.
    assert_eq!(app.lock().unwrap().store().fallback_category(), "Entertainment");

    let saved = std::fs::read_to_string(tmp.path().join("settings.json")).unwrap();
    assert!(saved.contains("Misc"));
    app.lock().unwrap().shutdown();

    let reopened = App::new(tmp.path().to_str().unwrap()).unwrap();
    assert_eq!(reopened.store().fallback_category(), "Misc");
    assert!(reopened.store().categories().iter().any(|c| c == "Misc"));
}

#[test]
fn test_settings_set_rejects_unknown_key_and_missing_params() {
    let (app, _tmp) = setup();
    let err = handle_method(&app, "settings.set", &json!({"key": "catalog.nope", "value": 1}))
        .unwrap_err();
    assert!(err.contains("not found"));
    assert!(handle_method(&app, "settings.set", &json!({"value": 1})).is_err());
    assert!(handle_method(&app, "settings.set", &json!({"key": "logging.level"})).is_err());
}

#[test]
fn test_settings_reset_restores_defaults() {
    let (app, _tmp) = setup();
    call(&app, "settings.set", json!({"key": "logging.level", "value": "debug"}));
    call(&app, "settings.set", json!({"key": "storage.bookmarks_key", "value": "videos"}));

    call(&app, "settings.reset", json!({}));
    let res = call(&app, "settings.get", json!({}));
    assert_eq!(res["storage"]["bookmarks_key"], "bookmarks");
    assert_eq!(res["catalog"]["fallback_category"], "Entertainment");
}

#[test]
fn test_category_assignable_excludes_all() {
    let (app, _tmp) = setup();
    call(&app, "category.add", json!({"name": "Podcasts"}));
    let res = call(&app, "category.assignable", json!({}));
    let names: Vec<&str> = res.as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
    assert!(!names.contains(&"All"));
    assert!(names.contains(&"Entertainment"));
    assert_eq!(names.last(), Some(&"Podcasts"));
    assert_eq!(names.len() + 1, call(&app, "category.list", json!({})).as_array().unwrap().len());
}
