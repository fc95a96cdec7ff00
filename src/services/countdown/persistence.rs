use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Error as SerdeError, Map, Value};

use super::storage::{CountdownStore, StoreError};

/// Key-value store kept as one flat JSON object on disk.
///
/// Every call reads or rewrites the whole file; the document holds three
/// short strings.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_entries(&self) -> Result<BTreeMap<String, String>> {
        load_entries(&self.path)
    }

    fn save_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        save_entries(&self.path, entries)
    }
}

impl CountdownStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.save_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.load_entries()?;
        if entries.remove(key).is_some() {
            self.save_entries(&entries)?;
        }
        Ok(())
    }
}

pub fn load_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read countdown store {}", path.display()))?;
    let object: Map<String, Value> =
        serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;

    object
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(text) => Ok((key, text)),
            _ => Err(anyhow::Error::from(StoreError::NonStringValue(key))),
        })
        .collect()
}

pub fn save_entries(path: &Path, entries: &BTreeMap<String, String>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(entries)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write countdown store {}", path.display()))?;
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    StoreError::Malformed {
        path: path.to_path_buf(),
        source: err,
    }
    .into()
}
