//! # Repz Architecture
//!
//! Repz is a **UI-agnostic workout-log library**. This is not a REPL
//! application that happens to have some library code; it's a library that
//! happens to ship with a REPL client.
//!
//! This distinction drives the entire architecture and should guide all
//! development.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads lines, dispatches commands, formats output         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Tokenizes raw argument text, tracks the open dataset     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Record Schema
//!
//! Every row of a dataset is an [`model::Entry`]: exercise, reps, weight,
//! date. The schema lives in `schema.rs` as a fixed column set with typed
//! coercion; both the store (CSV header checks) and the filter engine
//! (predicate values) go through it, so there is exactly one place that
//! knows what a column means.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a TUI, a web frontend, or any
//! other UI.
//!
//! ## Testing Strategy
//!
//! The architecture enables focused testing at each layer:
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic
//!    against `InMemoryStore`. This is where the lion's share of testing
//!    lives.
//!
//! 2. **API** (`api.rs`): Session tests for tokenization, dataset switching
//!    and write-through. Not the command logic itself.
//!
//! 3. **CLI** (`cli/` + thin `main.rs`): Integration tests drive the real
//!    binary over `-c` one-liners and piped stdin and assert on its output.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Entry`, `Dataset`)
//! - [`schema`]: Column set, parsing and typed coercion
//! - [`filter`]: Equality predicates and conjunctive evaluation
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Line dispatch, the REPL, and printing for the binary (not part
//!   of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod schema;
pub mod store;
