//! Runtime configuration resolved from the environment.
//!
//! | Variable            | Meaning                                   |
//! |---------------------|-------------------------------------------|
//! | `GROOVE_DATA_DIR`   | directory holding `groove.db`             |
//! | `GROOVE_SEARCH_URL` | search endpoint for free-text input       |
//! | `GROOVE_EPHEMERAL`  | `1`/`true` starts in ephemeral mode       |

use std::path::PathBuf;

use crate::platform;
use crate::services::url_resolver::DEFAULT_SEARCH_URL;

pub const DB_FILE_NAME: &str = "groove.db";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub search_url: String,
    pub force_ephemeral: bool,
}

impl AppConfig {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("GROOVE_DATA_DIR")
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(platform::get_data_dir);
        let search_url = lookup("GROOVE_SEARCH_URL")
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string());
        let force_ephemeral = lookup("GROOVE_EPHEMERAL")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            data_dir,
            search_url,
            force_ephemeral,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: platform::get_data_dir(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            force_ephemeral: false,
        }
    }
}
