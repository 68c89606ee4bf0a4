//! pk - to-do list library
//!
//! Core functionality for the pk CLI: a durable, ordered collection of task
//! records in a single JSON file, plus the command surface and the terminal
//! table view on top of it.
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `error`: Error types and result aliases
//! - `output`: Human/JSON result emission
//! - `store`: The task store (append, load, update-by-id)
//! - `task`: Task record and wire contract
//! - `ui`: Interactive table view using ratatui

pub mod cli;
pub mod error;
pub mod output;
pub mod store;
pub mod task;
pub mod ui;

pub use error::{Error, Result};
