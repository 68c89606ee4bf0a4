//! Task store for pk
//!
//! Maintains a durable, ordered collection of task records in a single JSON
//! file (default `data/.pk.json`). Three operations: append a new record,
//! load the full collection, and mutate fields of a record located by id.
//! All of them are synchronous whole-file read/modify/write.
//!
//! The file holds a top-level JSON array, pretty-printed with two-space
//! indentation. A legacy file holding a single bare task object is repaired
//! into a one-element array on the next append. Rewrites go through a
//! temp-file + rename so the file is either fully rewritten or left in its
//! pre-call state.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::task::{Task, TaskChanges};

/// Default store path, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "data/.pk.json";

/// Store manager for the task collection file.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Create a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store over the default path.
    pub fn default_location() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Append a new task built from `description` and `category`.
    ///
    /// Assigns the next id (max existing id + 1, starting at 1), stamps the
    /// current time, and rewrites the whole collection. Returns the stored
    /// task. Fails without touching the file if the existing content cannot
    /// be decoded at all.
    pub fn append(&self, description: &str, category: &str) -> Result<Task> {
        let mut tasks = self.read_lenient()?;

        let mut task = Task::new(description, category);
        task.id = Some(next_id(&tasks));
        tasks.push(task.clone());

        self.write_all(&tasks)?;
        debug!(path = %self.path.display(), count = tasks.len(), "appended task");
        Ok(task)
    }

    /// Load the full collection in on-disk order.
    ///
    /// Strict: the file must exist and hold a well-formed JSON array of task
    /// objects. No single-object fallback here, unlike append.
    pub fn load_all(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Err(Error::StoreNotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path)?;
        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Apply a partial update to the first record whose id matches.
    ///
    /// Only the fields supplied in `changes` are overwritten; id and creation
    /// timestamp are never touched. Returns the updated task. If no record
    /// matches, the file is left byte-identical and `TaskNotFound` is
    /// returned.
    pub fn update_by_id(&self, id: u64, changes: &TaskChanges) -> Result<Task> {
        let mut tasks = self.load_all()?;

        let task = tasks
            .iter_mut()
            .find(|task| task.id == Some(id))
            .ok_or(Error::TaskNotFound(id))?;

        changes.apply(task);
        let updated = task.clone();

        self.write_all(&tasks)?;
        debug!(path = %self.path.display(), id, "updated task");
        Ok(updated)
    }

    // =========================================================================
    // File I/O helpers
    // =========================================================================

    /// Read the collection for append: missing or empty files are an empty
    /// collection, a single bare object is wrapped into a one-element array,
    /// and anything else undecodable is a hard corrupt-store error.
    fn read_lenient(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        if let Ok(tasks) = serde_json::from_str::<Vec<Task>>(&content) {
            return Ok(tasks);
        }

        // Legacy format: a single task object at top level.
        if let Ok(single) = serde_json::from_str::<Task>(&content) {
            debug!(path = %self.path.display(), "repairing single-object store into array");
            return Ok(vec![single]);
        }

        Err(Error::CorruptStore(self.path.clone()))
    }

    /// Rewrite the whole collection pretty-printed, via temp file + rename.
    fn write_all(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(tasks)?;

        // Temp file in the same directory so the rename is atomic.
        let temp_path = self.path.with_extension("tmp");
        let mut file = File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

/// Next id under the max-existing-id + 1 policy.
fn next_id(tasks: &[Task]) -> u64 {
    tasks
        .iter()
        .filter_map(|task| task.id)
        .max()
        .map_or(1, |max| max + 1)
}
