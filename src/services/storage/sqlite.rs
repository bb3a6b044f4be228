use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::KeyValueStore;
use crate::services::database::Database;

/// Key-value store persisted in the `local_storage` table.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Wraps an opened database, creating the table if needed.
    pub fn new(db: Database) -> Result<Self> {
        db.initialize_schema()?;
        Ok(Self { db })
    }

    pub fn open(path: &str) -> Result<Self> {
        Self::new(Database::new(path)?)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.db
            .connection()
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read '{}' from local storage", key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.db
            .connection()
            .execute(
                "INSERT INTO local_storage (key, value, updated_at)
                 VALUES (?1, ?2, CURRENT_TIMESTAMP)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value],
            )
            .with_context(|| format!("Failed to write '{}' to local storage", key))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_then_get() {
        let mut store = SqliteStore::open(":memory:").unwrap();
        store.set("title", "Launch").unwrap();
        assert_eq!(store.get("title").unwrap(), Some("Launch".to_string()));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = SqliteStore::open(":memory:").unwrap();
        assert_eq!(store.get("date").unwrap(), None);
    }

    #[test]
    fn test_overwrite_with_empty_value() {
        let mut store = SqliteStore::open(":memory:").unwrap();
        store.set("date", "2030-01-01T00:00").unwrap();
        store.set("date", "").unwrap();

        assert_eq!(store.get("date").unwrap(), Some(String::new()));
        let rows: i64 = store
            .database()
            .connection()
            .query_row("SELECT COUNT(*) FROM local_storage", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("storage.db");
        let path = path.to_str().unwrap();

        {
            let mut store = SqliteStore::open(path).unwrap();
            store.set("title", "Wedding").unwrap();
        }

        let store = SqliteStore::open(path).unwrap();
        assert_eq!(store.get("title").unwrap(), Some("Wedding".to_string()));
    }
}
