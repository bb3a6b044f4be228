use anyhow::{Context, Result};
use rusqlite::Connection;

use super::schema;

/// Thin wrapper around the widget's SQLite connection.
pub struct Database {
    conn: Connection,
    path: String,
}

impl Database {
    /// Opens (or creates) a SQLite database at the provided path.
    ///
    /// # Examples
    /// ```
    /// use countdown_widget::services::database::Database;
    /// let db = Database::new(":memory:").unwrap();
    /// db.initialize_schema().unwrap();
    /// ```
    pub fn new(path: &str) -> Result<Self> {
        let conn =
            Connection::open(path).context(format!("Failed to open database at {}", path))?;

        Ok(Self {
            conn,
            path: path.to_string(),
        })
    }

    /// Provides read/write access to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Creates tables if they don't exist yet.
    pub fn initialize_schema(&self) -> Result<()> {
        schema::initialize_schema(self.connection())
    }
}
