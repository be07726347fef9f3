use super::DataStore;
use crate::error::{RepzError, Result};
use crate::model::Entry;
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    datasets: BTreeMap<String, Vec<Entry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_entries(&self, name: &str) -> Result<Vec<Entry>> {
        self.datasets
            .get(name)
            .cloned()
            .ok_or_else(|| RepzError::NotFound(name.to_string()))
    }

    fn save_entries(&mut self, name: &str, entries: &[Entry]) -> Result<()> {
        self.datasets.insert(name.to_string(), entries.to_vec());
        Ok(())
    }

    fn create_dataset(&mut self, name: &str) -> Result<()> {
        self.datasets.entry(name.to_string()).or_default();
        Ok(())
    }

    fn dataset_exists(&self, name: &str) -> bool {
        self.datasets.contains_key(name)
    }

    fn list_dataset_names(&self) -> Result<Vec<String>> {
        Ok(self.datasets.keys().cloned().collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::NaiveDate;

    /// Shorthand entry constructor for tests; the date must be `YYYY-MM-DD`.
    pub fn entry(exercise: &str, reps: i64, weight: f64, date: &str) -> Entry {
        Entry::new(
            exercise,
            reps,
            weight,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_dataset(mut self, name: &str) -> Self {
            self.store.create_dataset(name).unwrap();
            self
        }

        pub fn with_entries(mut self, name: &str, entries: Vec<Entry>) -> Self {
            self.store.save_entries(name, &entries).unwrap();
            self
        }
    }
}
