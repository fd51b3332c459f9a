//! vidmark database layer.
//!
//! Provides SQLite connection management, schema migrations, and the
//! key-value stores the catalog is persisted into.
//!
//! # Usage
//!
//! ```no_run
//! use vidmark::database::{Database, KeyValueStore, SqliteKvStore};
//!
//! let db = Database::open("vidmark.db").expect("failed to open database");
//! let store = SqliteKvStore::new(db);
//! store.set_item("categories", "[\"All\"]").expect("write failed");
//! ```

pub mod connection;
pub mod kv_store;
pub mod migrations;

pub use connection::Database;
pub use kv_store::{KeyValueStore, MemoryKvStore, SqliteKvStore};
