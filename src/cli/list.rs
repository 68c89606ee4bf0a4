//! pk list command implementation
//!
//! Loads the full collection once and hands the snapshot to the interactive
//! table view. The view performs no further store access.

use std::path::PathBuf;

use crate::error::Result;
use crate::ui;

pub struct ListOptions {
    pub file: Option<PathBuf>,
}

pub fn run(opts: ListOptions) -> Result<()> {
    let store = super::open_store(opts.file);
    let tasks = store.load_all()?;
    ui::run(tasks)
}
