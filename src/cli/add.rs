//! pk add command implementation
//!
//! Builds a task with the current timestamp and appends it to the store.

use std::path::PathBuf;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::Task;

pub struct AddOptions {
    pub task: String,
    pub cat: String,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct AddReport {
    id: u64,
    task: Task,
    file: PathBuf,
}

pub fn run(opts: AddOptions) -> Result<()> {
    let store = super::open_store(opts.file);
    let task = store.append(&opts.task, &opts.cat)?;
    let id = task.id.unwrap_or_default();

    let mut human = HumanOutput::new(format!("Task {id} added"));
    human.push_summary("task", task.task.clone());
    human.push_summary("cat", task.category.clone());
    human.push_summary("file", store.path().display().to_string());

    let report = AddReport {
        id,
        task,
        file: store.path().to_path_buf(),
    };

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "add",
        &report,
        Some(&human),
    )?;

    Ok(())
}
