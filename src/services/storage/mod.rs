//! Durable key-value storage for the widget's two persisted strings.
//!
//! The countdown only ever talks to [`KeyValueStore`], so the SQLite-backed
//! store used by the desktop app can be swapped for [`MemoryStore`] in tests
//! and headless runs.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use anyhow::Result;

/// Key holding the event title.
pub const TITLE_KEY: &str = "title";
/// Key holding the raw target date string.
pub const DATE_KEY: &str = "date";

/// Narrow get/set interface over a string-to-string store.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read `key`, treating missing, blank and unreadable values alike as absent.
pub fn load_non_blank(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(Some(value)) if !value.trim().is_empty() => Some(value),
        Ok(_) => None,
        Err(err) => {
            log::warn!("Failed to read '{}' from local storage: {:#}", key, err);
            None
        }
    }
}
