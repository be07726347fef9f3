//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer, and the single
//! entry point for all repz operations regardless of the frontend driving it.
//!
//! Unlike the command functions, the facade is stateful: it owns the storage
//! backend and the currently open dataset, so a sequence of calls behaves
//! like one logbook session. Commands themselves stay pure; the facade
//! commits their output back into the session.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Normalizes inputs** (splits raw argument text into tokens, honoring
//!   double quotes)
//! - **Dispatches** to the appropriate command function
//! - **Tracks the session** (which dataset is open, what its rows are)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Presentation concerns**: no stdout, stderr, or string formatting
//!
//! ## Generic Over DataStore
//!
//! `RepzApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RepzApi<FileStore>`
//! - Testing: `RepzApi<InMemoryStore>`

use std::path::Path;

use crate::commands;
use crate::error::Result;
use crate::model::{Dataset, Entry};
use crate::store::DataStore;

/// The main API facade for repz operations.
///
/// Holds the store and the dataset the session is working on. All frontends
/// (REPL, piped stdin, `-c` one-liners) interact through this type.
pub struct RepzApi<S: DataStore> {
    store: S,
    dataset: Dataset,
}

impl<S: DataStore> RepzApi<S> {
    /// Opens a session on the named dataset, creating it first if the store
    /// has never seen it. An existing dataset is loaded as-is.
    pub fn new(mut store: S, dataset_name: &str) -> Result<Self> {
        store.create_dataset(dataset_name)?;
        let entries = store.load_entries(dataset_name)?;
        Ok(Self {
            store,
            dataset: Dataset::with_entries(dataset_name, entries),
        })
    }

    /// Name of the dataset this session is working on.
    pub fn dataset_name(&self) -> &str {
        &self.dataset.name
    }

    /// Rows of the open dataset, in their stored order.
    pub fn entries(&self) -> &[Entry] {
        &self.dataset.entries
    }

    pub fn add(&mut self, args: &str) -> Result<commands::CmdResult> {
        let fields = tokenize(args);
        commands::add::run(&mut self.store, &mut self.dataset, &fields)
    }

    pub fn view(&self, args: &str) -> Result<commands::CmdResult> {
        let tokens = tokenize(args);
        commands::view::run(&self.dataset, &tokens)
    }

    pub fn sort(&mut self, args: &str) -> Result<commands::CmdResult> {
        let tokens = tokenize(args);
        let column = tokens.first().map(String::as_str).unwrap_or_default();
        commands::sort::run(&mut self.store, &mut self.dataset, column)
    }

    pub fn exercises(&self) -> Result<commands::CmdResult> {
        commands::exercises::run(&self.dataset)
    }

    pub fn merge(&mut self, args: &str) -> Result<commands::CmdResult> {
        let tokens = tokenize(args);
        let path = tokens.first().map(String::as_str).unwrap_or_default();
        commands::merge::run(&mut self.store, &mut self.dataset, Path::new(path))
    }

    pub fn files(&self) -> Result<commands::CmdResult> {
        commands::files::run(&self.store)
    }

    /// Switches the session to another existing dataset. The current dataset
    /// is kept if the switch fails.
    pub fn open(&mut self, args: &str) -> Result<commands::CmdResult> {
        let tokens = tokenize(args);
        let name = tokens.first().map(String::as_str).unwrap_or_default();
        let result = commands::open::run(&self.store, name)?;
        if let Some(dataset) = &result.dataset {
            self.dataset = dataset.clone();
        }
        Ok(result)
    }
}

/// Splits raw argument text on whitespace, keeping double-quoted spans
/// together. Quotes are delimiters, not content: `add "Bench Press" 8 135`
/// yields the field `Bench Press`.
fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
