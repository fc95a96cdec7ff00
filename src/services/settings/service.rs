use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::{AppConfig, StorageBackend};
use crate::services::countdown::{CountdownStore, JsonFileStore};
use crate::services::database::SqliteStore;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV_VAR: &str = "DAY_COUNTDOWN_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Loads the application configuration and resolves where data lives.
pub struct SettingsService {
    config_path: PathBuf,
    config: AppConfig,
}

impl SettingsService {
    /// Loads config from `override_path`, then `DAY_COUNTDOWN_CONFIG`, then
    /// the platform config directory. A missing file means defaults.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let config_path = Self::resolve_config_path(override_path);
        let config = Self::read_config(&config_path)?;
        Ok(Self {
            config_path,
            config,
        })
    }

    pub fn from_config(config_path: PathBuf, config: AppConfig) -> Self {
        Self {
            config_path,
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn resolve_config_path(override_path: Option<&Path>) -> PathBuf {
        if let Some(path) = override_path {
            return path.to_path_buf();
        }

        if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
            return PathBuf::from(path);
        }

        if let Some(dirs) = Self::project_dirs() {
            dirs.config_dir().join(CONFIG_FILE_NAME)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for config");
            PathBuf::from(CONFIG_FILE_NAME)
        }
    }

    pub fn read_config(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            log::debug!("No config at {}; using defaults", path.display());
            return Ok(AppConfig::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config = toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Writes the current config, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(&self.config)?;
        fs::write(&self.config_path, data).with_context(|| {
            format!("failed to write config to {}", self.config_path.display())
        })?;
        Ok(())
    }

    /// Data directory: the configured override or the platform data dir.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.config.data_dir {
            return dir.clone();
        }

        if let Some(dirs) = Self::project_dirs() {
            dirs.data_dir().to_path_buf()
        } else {
            log::warn!("Unable to resolve project directory; using current dir for data");
            PathBuf::from(".")
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir().join(self.config.store_file_name())
    }

    /// Opens the configured countdown store.
    pub fn open_store(&self) -> Result<Box<dyn CountdownStore>> {
        let path = self.store_path();
        log::info!(
            "Using {} countdown store at {}",
            self.config.storage_backend,
            path.display()
        );

        match self.config.storage_backend {
            StorageBackend::Json => Ok(Box::new(JsonFileStore::new(path))),
            StorageBackend::Sqlite => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create dir {}", parent.display()))?;
                }
                let path = path
                    .to_str()
                    .with_context(|| format!("non UTF-8 store path {}", path.display()))?;
                Ok(Box::new(SqliteStore::open(path)?))
            }
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "DayCountdown", "DayCountdown")
    }
}
