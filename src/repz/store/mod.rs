//! # Storage Layer
//!
//! This module defines the storage abstraction for repz. The [`DataStore`]
//! trait lets the command layer work against different backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One CSV file per dataset: `{name}{ext}` under a single data directory
//!   - Every mutation rewrites the whole file (header plus rows) through a
//!     temp file followed by a rename, so an interrupted write never leaves
//!     a truncated dataset
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── data.csv            # Default dataset
//! ├── cutting.csv         # Any further named datasets
//! └── config.json         # Session configuration
//! ```
//!
//! Each dataset file is UTF-8 CSV whose first line is always the header
//! `Exercise,Reps,Weight,Date`; dates are serialized as `YYYY-MM-DD`.

use crate::error::Result;
use crate::model::Entry;

pub mod fs;
pub mod memory;

/// Abstract interface for dataset storage.
///
/// A dataset is addressed by its bare name; how that maps to a location is
/// the implementation's business.
pub trait DataStore {
    /// Load every row of a dataset, in stored order. The header row is
    /// validated, not returned. A name the store does not know is
    /// [`NotFound`](crate::error::RepzError::NotFound).
    fn load_entries(&self, name: &str) -> Result<Vec<Entry>>;

    /// Rewrite a dataset in full: header plus all entries, in table order.
    fn save_entries(&mut self, name: &str, entries: &[Entry]) -> Result<()>;

    /// Materialize an empty dataset (header only) unless it already exists;
    /// an existing dataset is left untouched.
    fn create_dataset(&mut self, name: &str) -> Result<()>;

    /// Whether a dataset of this name exists.
    fn dataset_exists(&self, name: &str) -> bool;

    /// Names of all datasets, sorted.
    fn list_dataset_names(&self) -> Result<Vec<String>>;
}
