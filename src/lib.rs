//! vidmark: a local catalog manager for saved video bookmarks.
//!
//! This library crate exposes all modules for use by the binaries and integration tests.

pub mod app;
pub mod database;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod services;
pub mod rpc_handler;
pub mod types;
