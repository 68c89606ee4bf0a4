//! Task record and wire contract.
//!
//! The store file holds a single JSON array of task objects. One canonical
//! field-naming contract applies on every read and write path:
//! `id`, `task`, `cat`, `time` (RFC 3339), `isdone`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store on append.
    ///
    /// Legacy files written before ids existed may omit it; such records are
    /// kept as-is and are unreachable by id lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// Free-text description.
    pub task: String,

    /// Free-text category label.
    #[serde(rename = "cat")]
    pub category: String,

    /// Creation timestamp. Fixed at append time, never modified.
    #[serde(rename = "time")]
    pub created_at: DateTime<Utc>,

    /// Completion flag.
    #[serde(rename = "isdone", default)]
    pub done: bool,
}

impl Task {
    /// Build a fresh task with the current timestamp and `done = false`.
    /// The id is filled in by the store when the task is appended.
    pub fn new(description: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: None,
            task: description.into(),
            category: category.into(),
            created_at: Utc::now(),
            done: false,
        }
    }
}

/// Partial update for a task located by id.
///
/// `None` fields leave the corresponding record field unchanged. The id and
/// creation timestamp can never be changed.
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub category: Option<String>,
    pub done: Option<bool>,
    pub task: Option<String>,
}

impl TaskChanges {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.done.is_none() && self.task.is_none()
    }

    /// Apply the supplied fields to a record in place.
    pub fn apply(&self, task: &mut Task) {
        if let Some(category) = &self.category {
            task.category = category.clone();
        }
        if let Some(done) = self.done {
            task.done = done;
        }
        if let Some(description) = &self.task {
            task.task = description.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Task {
        Task {
            id: Some(1),
            task: "Buy milk".to_string(),
            category: "Home".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            done: false,
        }
    }

    #[test]
    fn serializes_with_canonical_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["task"], "Buy milk");
        assert_eq!(json["cat"], "Home");
        assert_eq!(json["isdone"], false);
        assert!(json["time"].as_str().unwrap().starts_with("2025-01-02T03:04:05"));
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let task = sample();
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, back);
    }

    #[test]
    fn legacy_record_without_id_deserializes() {
        let json = r#"{"task":"Old","cat":"Misc","time":"2024-06-01T00:00:00Z","isdone":true}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, None);
        assert!(task.done);
    }

    #[test]
    fn empty_changes_apply_as_noop() {
        let mut task = sample();
        let before = task.clone();
        TaskChanges::default().apply(&mut task);
        assert_eq!(task, before);
    }

    #[test]
    fn changes_touch_only_supplied_fields() {
        let mut task = sample();
        let changes = TaskChanges {
            done: Some(true),
            ..Default::default()
        };
        changes.apply(&mut task);
        assert!(task.done);
        assert_eq!(task.task, "Buy milk");
        assert_eq!(task.category, "Home");
        assert_eq!(task.id, Some(1));
    }
}
