//! vidmark RPC server: JSON-RPC over stdin/stdout.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"bookmark.add", "params":{"url":"...","title":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! Diagnostics go to stderr.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Mutex;

use tracing::{error, info, warn};

use vidmark::app::App;
use vidmark::logging;
use vidmark::platform;
use vidmark::rpc_handler::handle_method;
use vidmark::services::settings_engine::SettingsEngineTrait;

use serde_json::{json, Value};

fn reply(out: &mut impl Write, response: &Value) -> io::Result<()> {
    writeln!(out, "{}", response)?;
    out.flush()
}

fn main() -> ExitCode {
    let data_dir = std::env::var("VIDMARK_DATA_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| platform::get_data_dir());
    let mut settings = App::settings_engine_for(&data_dir);
    let loaded = settings.load();
    logging::init(&settings.get_settings().logging.level);
    if let Err(e) = loaded {
        warn!(error = %e, "unreadable settings, using defaults");
    }

    let app = match App::open(&data_dir, settings) {
        Ok(app) => Mutex::new(app),
        Err(e) => {
            error!(error = %e, dir = %data_dir.display(), "failed to open catalog");
            return ExitCode::FAILURE;
        }
    };
    info!(dir = %data_dir.display(), "vidmark-rpc listening on stdin");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    if reply(&mut out, &ready).is_err() {
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(req) => {
                let id = req.get("id").cloned().unwrap_or(Value::Null);
                let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
                let params = req.get("params").cloned().unwrap_or(json!({}));
                match handle_method(&app, method, &params) {
                    Ok(val) => json!({"id": id, "result": val}),
                    Err(err) => json!({"id": id, "error": err}),
                }
            }
            Err(e) => json!({"id": null, "error": format!("parse error: {}", e)}),
        };

        if reply(&mut out, &response).is_err() {
            break;
        }
    }

    if let Ok(mut a) = app.lock() {
        a.shutdown();
    }
    ExitCode::SUCCESS
}
