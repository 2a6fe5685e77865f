// Groove platform paths
// Linux:   $XDG_DATA_HOME/groove or ~/.local/share/groove
// macOS:   ~/Library/Application Support/Groove
// Windows: %APPDATA%/Groove

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the platform-specific data directory holding the state database.
#[cfg(target_os = "linux")]
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("groove"),
        _ => home_dir().join(".local").join("share").join("groove"),
    }
}

#[cfg(target_os = "macos")]
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Groove")
}

#[cfg(target_os = "windows")]
pub fn get_data_dir() -> PathBuf {
    match env::var("APPDATA") {
        Ok(appdata) => PathBuf::from(appdata).join("Groove"),
        Err(_) => home_dir().join("AppData").join("Roaming").join("Groove"),
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn get_data_dir() -> PathBuf {
    home_dir().join(".groove")
}
