// vidmark platform paths
// Linux:   $XDG_CONFIG_HOME/vidmark, $XDG_DATA_HOME/vidmark (~/.config, ~/.local/share)
// macOS:   ~/Library/Application Support/vidmark
// Windows: %APPDATA%/vidmark

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "vidmark";

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Resolves `$<xdg_var>/vidmark`, falling back to `~/<fallback>/vidmark`.
#[allow(dead_code)]
fn xdg_dir(xdg_var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(xdg_var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join(APP_DIR),
        _ => fallback
            .iter()
            .fold(home_dir(), |path, part| path.join(part))
            .join(APP_DIR),
    }
}

/// Returns the directory holding `settings.json`.
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        home_dir().join("Library").join("Application Support").join(APP_DIR)
    }
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
        PathBuf::from(appdata).join(APP_DIR)
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        xdg_dir("XDG_CONFIG_HOME", &[".config"])
    }
}

/// Returns the directory holding the catalog database.
pub fn get_data_dir() -> PathBuf {
    #[cfg(any(target_os = "macos", target_os = "windows"))]
    {
        get_config_dir()
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        xdg_dir("XDG_DATA_HOME", &[".local", "share"])
    }
}
