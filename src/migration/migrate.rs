//! Upgrade a stored layout to the current [`TaskList`]

use super::legacy_types::{StoredLayout, TaskListMigrationHelper};
use crate::todo::{FORMAT_VERSION, Task, TaskId, TaskList, local_date_today};
use crate::validation::normalize_task_text;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Convert any supported stored layout to the latest in-memory format
///
/// - tasks without an ID (or with ID 0) get the next counter value, in order
/// - duplicate IDs keep their first holder; later holders are renumbered
/// - the counter never ends up below the largest ID in the list
/// - entries whose text is blank after trimming are dropped
/// - missing priority and dates get their defaults
///
/// Fails when a task needs a new ID and the counter is already at `u32::MAX`.
pub fn migrate_to_latest(layout: StoredLayout) -> Result<TaskList, String> {
    let helper = match layout {
        StoredLayout::Document(helper) => helper,
        StoredLayout::Bare(tasks) => TaskListMigrationHelper {
            format_version: 1,
            task_counter: 0,
            tasks,
        },
    };

    if helper.format_version < FORMAT_VERSION {
        debug!(
            from = helper.format_version,
            to = FORMAT_VERSION,
            "migrating stored task list"
        );
    }

    let max_stored_id = helper
        .tasks
        .iter()
        .filter_map(|t| t.id)
        .map(|id| id.0)
        .max()
        .unwrap_or(0);

    let mut list = TaskList::new();
    list.task_counter = helper.task_counter.max(max_stored_id);

    let mut seen: HashSet<TaskId> = HashSet::new();
    let mut dropped = 0usize;

    for stored in helper.tasks {
        let Some(text) = normalize_task_text(&stored.text) else {
            dropped += 1;
            continue;
        };

        let id = match stored.id {
            Some(id) if id.0 > 0 && seen.insert(id) => id,
            _ => {
                let id = list
                    .generate_task_id()
                    .ok_or_else(|| format!("task IDs exhausted at {}", u32::MAX))?;
                seen.insert(id);
                id
            }
        };

        let today = local_date_today();
        let created_at = stored.created_at.unwrap_or(today);
        list.tasks.push(Task {
            id,
            text,
            completed: stored.completed,
            priority: stored.priority.unwrap_or_default(),
            created_at,
            updated_at: stored.updated_at.unwrap_or(created_at),
        });
    }

    if dropped > 0 {
        warn!(dropped, "dropped stored tasks with empty text");
    }

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::Priority;

    fn layout_from_json(json: &str) -> StoredLayout {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_migrate_bare_browser_array() {
        let layout = layout_from_json(
            r#"[{"text": "buy milk", "completed": false}, {"text": "call mom", "completed": true}]"#,
        );
        let list = migrate_to_latest(layout).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.task_counter, 2);
        assert_eq!(list.tasks()[0].id, TaskId(1));
        assert_eq!(list.tasks()[0].text, "buy milk");
        assert_eq!(list.tasks()[0].priority, Priority::Medium);
        assert_eq!(list.tasks()[1].id, TaskId(2));
        assert!(list.tasks()[1].completed);
    }

    #[test]
    fn test_migrate_keeps_stored_ids() {
        let layout = layout_from_json(
            r#"{"format_version": 2, "task_counter": 9, "tasks": [{"id": 4, "text": "a"}, {"id": 7, "text": "b", "priority": "high"}]}"#,
        );
        let list = migrate_to_latest(layout).unwrap();

        let ids: Vec<TaskId> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(4), TaskId(7)]);
        assert_eq!(list.task_counter, 9);
        assert_eq!(list.tasks()[1].priority, Priority::High);
    }

    #[test]
    fn test_migrate_raises_counter_to_max_id() {
        let layout = layout_from_json(
            r#"{"task_counter": 1, "tasks": [{"id": 5, "text": "a"}, {"text": "b"}]}"#,
        );
        let list = migrate_to_latest(layout).unwrap();

        let ids: Vec<TaskId> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(5), TaskId(6)]);
        assert_eq!(list.task_counter, 6);
    }

    #[test]
    fn test_migrate_renumbers_duplicates() {
        let layout = layout_from_json(
            r#"{"tasks": [{"id": 2, "text": "a"}, {"id": 2, "text": "b"}, {"id": 0, "text": "c"}]}"#,
        );
        let list = migrate_to_latest(layout).unwrap();

        let ids: Vec<TaskId> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(2), TaskId(3), TaskId(4)]);
    }

    #[test]
    fn test_migrate_drops_blank_and_trims() {
        let layout = layout_from_json(
            r#"[{"text": "   "}, {"text": "  spaced\r\nout  "}, {"text": ""}]"#,
        );
        let list = migrate_to_latest(layout).unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list.tasks()[0].text, "spaced\nout");
    }

    #[test]
    fn test_migrate_fails_when_ids_exhausted() {
        let layout = layout_from_json(
            r#"{"task_counter": 4294967295, "tasks": [{"id": 4294967295, "text": "a"}, {"text": "b"}]}"#,
        );
        let err = migrate_to_latest(layout).unwrap_err();
        assert!(err.contains("exhausted"));
    }

    #[test]
    fn test_migrate_keeps_max_id_without_renumbering() {
        let layout = layout_from_json(
            r#"{"task_counter": 4294967295, "tasks": [{"id": 4294967295, "text": "a"}]}"#,
        );
        let list = migrate_to_latest(layout).unwrap();
        assert_eq!(list.tasks()[0].id, TaskId(u32::MAX));
    }

    #[test]
    fn test_migrate_fills_updated_from_created() {
        let layout =
            layout_from_json(r#"[{"text": "a", "created_at": "2024-01-01"}]"#);
        let list = migrate_to_latest(layout).unwrap();

        let task = &list.tasks()[0];
        assert_eq!(task.created_at.to_string(), "2024-01-01");
        assert_eq!(task.updated_at, task.created_at);
    }
}
