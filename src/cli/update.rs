//! pk update command implementation
//!
//! Validates the id and flag values before touching the store, then applies
//! a partial update to the matching record. Empty-string flag values mean
//! "leave the field unchanged".

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::{Task, TaskChanges};

pub struct UpdateOptions {
    pub id: String,
    pub cat: Option<String>,
    pub isdone: Option<String>,
    pub task: Option<String>,
    pub file: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct UpdateReport {
    id: u64,
    task: Task,
    file: PathBuf,
}

pub fn run(opts: UpdateOptions) -> Result<()> {
    let id: u64 = opts.id.trim().parse().map_err(|_| {
        Error::InvalidArgument(format!("task id must be an integer, got '{}'", opts.id))
    })?;

    let changes = TaskChanges {
        category: non_empty(opts.cat),
        done: parse_done_flag(opts.isdone)?,
        task: non_empty(opts.task),
    };

    let store = super::open_store(opts.file);
    let task = store.update_by_id(id, &changes)?;

    let mut human = HumanOutput::new(format!("Task {id} updated successfully"));
    human.push_summary("task", task.task.clone());
    human.push_summary("cat", task.category.clone());
    human.push_summary("isdone", task.done.to_string());

    let report = UpdateReport {
        id,
        task,
        file: store.path().to_path_buf(),
    };

    emit_success(
        OutputOptions {
            json: opts.json,
            quiet: opts.quiet,
        },
        "update",
        &report,
        Some(&human),
    )?;

    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn parse_done_flag(value: Option<String>) -> Result<Option<bool>> {
    match non_empty(value) {
        None => Ok(None),
        Some(raw) => raw.parse::<bool>().map(Some).map_err(|_| {
            Error::InvalidArgument(format!(
                "invalid value '{raw}' for 'isdone': must be 'true' or 'false'"
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn done_flag_accepts_true_false_and_empty() {
        assert_eq!(parse_done_flag(None).unwrap(), None);
        assert_eq!(parse_done_flag(Some(String::new())).unwrap(), None);
        assert_eq!(parse_done_flag(Some("true".to_string())).unwrap(), Some(true));
        assert_eq!(
            parse_done_flag(Some("false".to_string())).unwrap(),
            Some(false)
        );
    }

    #[test]
    fn done_flag_rejects_other_values() {
        let err = parse_done_flag(Some("yes".to_string())).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
