// Settings module
// Application configuration read from config.toml

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the countdown input is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// Flat key-value JSON file
    Json,
    /// Key-value table in a SQLite database
    Sqlite,
}

impl Default for StorageBackend {
    fn default() -> Self {
        Self::Json
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,
    /// Default `env_logger` filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::default(),
            data_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// File name of the store inside the data directory.
    pub fn store_file_name(&self) -> &'static str {
        match self.storage_backend {
            StorageBackend::Json => "countdown.json",
            StorageBackend::Sqlite => "countdown.db",
        }
    }
}
