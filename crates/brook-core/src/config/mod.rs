//! Runtime configuration shared by the desktop app and CLI.
//!
//! User preferences live in the `settings` table (see [`crate::models::Settings`]);
//! this module only covers where things are and how loudly to log, resolved
//! from the environment (a `.env` file is loaded by the binaries first).

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::util::normalize_text_option;

/// Overrides the database location
pub const DB_PATH_ENV: &str = "BROOK_DB_PATH";
/// Extra `tracing` filter directives, e.g. `brook_core=trace`
pub const LOG_ENV: &str = "BROOK_LOG";

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Location of the `SQLite` article store
    pub db_path: PathBuf,
    /// Additional log filter directives
    pub log_filter: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            log_filter: None,
        }
    }
}

impl AppConfig {
    /// Resolve configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = normalize_text_option(lookup(DB_PATH_ENV))
            .map_or_else(default_db_path, PathBuf::from);
        let log_filter = normalize_text_option(lookup(LOG_ENV));

        Self {
            db_path,
            log_filter,
        }
    }

    /// Replace the database path when an explicit one is given (e.g. `--db-path`)
    #[must_use]
    pub fn with_db_path(mut self, db_path: Option<PathBuf>) -> Self {
        if let Some(path) = db_path {
            self.db_path = path;
        }
        self
    }

    /// Create the directory that will hold the database
    pub fn ensure_data_dir(&self) -> Result<()> {
        if let Some(parent) = self.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

/// `<data_dir>/brook/brook.db`, or `./brook/brook.db` without a data dir
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("brook")
        .join("brook.db")
}
