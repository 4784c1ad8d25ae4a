//! Common test utilities for integration tests

#![allow(dead_code)]

use tempfile::TempDir;
use todo_list::{FileStore, MemoryStore, TaskId, TaskListController, Transition};

/// Create a controller over a file inside a fresh temporary directory
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn get_file_controller(name: &str) -> (TaskListController<FileStore>, TempDir) {
    let dir = TempDir::new().unwrap();
    let controller = TaskListController::new(FileStore::new(dir.path().join(name)));
    (controller, dir)
}

/// Reopen the file a controller was created on, as a page reload would
pub fn reload(dir: &TempDir, name: &str) -> TaskListController<FileStore> {
    TaskListController::new(FileStore::new(dir.path().join(name)))
}

pub fn memory_controller(store: &MemoryStore) -> TaskListController<&MemoryStore> {
    TaskListController::new(store)
}

/// Add tasks in order and return their IDs
pub fn add_all<S: todo_list::PersistenceStore>(
    todo: &mut TaskListController<S>,
    texts: &[&str],
) -> Vec<TaskId> {
    texts
        .iter()
        .map(|text| {
            assert_eq!(todo.add(text, None), Transition::ListChanged);
            todo.state().tasks().tasks().last().unwrap().id
        })
        .collect()
}

pub fn visible_texts<S: todo_list::PersistenceStore>(todo: &TaskListController<S>) -> Vec<String> {
    todo.visible().iter().map(|t| t.text.clone()).collect()
}
