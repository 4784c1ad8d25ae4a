//! Permissive shapes used to read any stored task list version

use crate::todo::{Priority, TaskId};
use chrono::NaiveDate;
use serde::Deserialize;

/// A task as found in storage, with every field that older versions may
/// lack made optional
#[derive(Debug, Clone, Deserialize)]
pub struct StoredTask {
    #[serde(default)]
    pub id: Option<TaskId>,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub created_at: Option<NaiveDate>,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

/// Helper struct for deserializing a task list document with migration support
#[derive(Debug, Deserialize)]
pub struct TaskListMigrationHelper {
    #[serde(default)]
    pub format_version: u32,
    #[serde(default)]
    pub task_counter: u32,
    #[serde(default)]
    pub tasks: Vec<StoredTask>,
}

/// Top-level layout of a stored list
///
/// The browser kept a bare JSON array of tasks; everything written since is a
/// document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StoredLayout {
    Document(TaskListMigrationHelper),
    Bare(Vec<StoredTask>),
}
