//! Diagnostic logging setup.
//!
//! Everything goes to stderr: stdout is reserved for the RPC protocol.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_level`. Calling this twice is harmless; the
/// second call reports `false` and leaves the first subscriber in place.
pub fn init(default_level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init()
        .is_ok()
}
