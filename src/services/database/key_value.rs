use anyhow::{Context, Result};
use rusqlite::OptionalExtension;

use super::Database;
use crate::services::countdown::CountdownStore;

/// Countdown store backed by the `key_value` table.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Opens the database at `path` and makes sure the table exists.
    pub fn open(path: &str) -> Result<Self> {
        let db = Database::new(path)?;
        db.initialize_schema()?;
        Ok(Self { db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl CountdownStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.db
            .connection()
            .query_row(
                "SELECT value FROM key_value WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read '{}' from key_value", key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.db
            .connection()
            .execute(
                "INSERT INTO key_value (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = CURRENT_TIMESTAMP",
                [key, value],
            )
            .with_context(|| format!("Failed to write '{}' to key_value", key))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.db
            .connection()
            .execute("DELETE FROM key_value WHERE key = ?1", [key])
            .with_context(|| format!("Failed to delete '{}' from key_value", key))?;
        Ok(())
    }
}
