// Test fixtures - reusable test data
// Provides consistent clocks, targets and stores across test files

#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use countdown_widget::services::storage::{KeyValueStore, MemoryStore, DATE_KEY, TITLE_KEY};

/// Sample instants for testing
pub mod dates {
    use super::*;

    /// Returns Jan 15, 2025 at 10:00 local time
    pub fn reference_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap()
    }

    /// One day, one hour, one minute and one second after `reference_now`
    pub fn one_of_each_later() -> DateTime<Local> {
        reference_now() + chrono::Duration::milliseconds(90_061_000)
    }

    /// Well before `reference_now`
    pub fn new_year_2024() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }
}

/// Pre-populated stores
pub mod stores {
    use super::*;

    pub fn with_values(title: Option<&str>, date: Option<&str>) -> MemoryStore {
        let mut store = MemoryStore::new();
        if let Some(title) = title {
            store.set(TITLE_KEY, title).unwrap();
        }
        if let Some(date) = date {
            store.set(DATE_KEY, date).unwrap();
        }
        store
    }
}
