//! Command-line interface for pk
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is implemented in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;

mod add;
mod list;
mod update;

/// pk - to-do list manager
///
/// Persists tasks as a JSON array on disk and renders them as an
/// interactive terminal table.
#[derive(Parser, Debug)]
#[command(name = "pk")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the store file (defaults to data/.pk.json)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task to the to-do list
    Add {
        /// The task description
        #[arg(short, long)]
        task: String,

        /// The task category
        #[arg(short, long)]
        cat: String,
    },

    /// List all tasks in an interactive table
    List,

    /// Update the category, completion status, or description of a task by id
    Update {
        /// Id of the task to update
        id: String,

        /// The new category for the task
        #[arg(long)]
        cat: Option<String>,

        /// Set to 'true' or 'false' to update the completion status
        #[arg(long)]
        isdone: Option<String>,

        /// The new description of the task
        #[arg(long)]
        task: Option<String>,
    },
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Add { task, cat } => add::run(add::AddOptions {
                task,
                cat,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
            Commands::List => list::run(list::ListOptions { file: self.file }),
            Commands::Update {
                id,
                cat,
                isdone,
                task,
            } => update::run(update::UpdateOptions {
                id,
                cat,
                isdone,
                task,
                file: self.file,
                json: self.json,
                quiet: self.quiet,
            }),
        }
    }
}

/// Resolve the store from the global `--file` option.
pub(crate) fn open_store(file: Option<PathBuf>) -> crate::store::TaskStore {
    match file {
        Some(path) => crate::store::TaskStore::new(path),
        None => crate::store::TaskStore::default_location(),
    }
}
