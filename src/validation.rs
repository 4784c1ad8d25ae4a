//! Validation helper functions for task input
//!
//! This module contains the text normalization every task goes through and
//! the error messages shown when a command names a task that does not exist.

use crate::migration::normalize_string_line_endings;
use crate::todo::{TaskId, TaskList};

/// Normalize task text for storage
///
/// Trims surrounding whitespace and normalizes line endings.
///
/// # Returns
/// The normalized text, or `None` if nothing is left after trimming
pub fn normalize_task_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(normalize_string_line_endings(trimmed))
    }
}

/// Format an error message for an unknown task ID with the available IDs
///
/// # Arguments
/// * `id` - The ID that was not found
/// * `list` - The list that was searched
pub fn format_unknown_task_error(id: TaskId, list: &TaskList) -> String {
    if list.is_empty() {
        format!("Task '{}' does not exist. The list is empty.", id)
    } else {
        let ids: Vec<String> = list.iter().map(|t| t.id.to_string()).collect();
        format!(
            "Task '{}' does not exist.\nAvailable tasks: {}",
            id,
            ids.join(", ")
        )
    }
}
