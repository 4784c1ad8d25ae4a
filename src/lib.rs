//! Personal To-Do List Library
//!
//! This library implements a personal to-do list: add, edit, delete,
//! complete, filter and prioritize tasks, with the list persisted to a local
//! file and a light/dark display mode.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Controller Layer**: `TaskListController` - Applies user intents and persists the result
//! - **Domain Layer**: `todo` module - Task models and pure state transitions
//! - **Persistence Layer**: `storage` module - `PersistenceStore` port with file and memory stores
//!
//! The terminal front end lives in the binary; it renders with the
//! `formatting` module and turns typed commands into [`Intent`]s.
//!
//! # Example
//!
//! ```no_run
//! use todo_list::{FileStore, TaskListController};
//!
//! let mut todo = TaskListController::new(FileStore::new("todo.toml"));
//! todo.add("buy milk", None);
//! for task in todo.visible() {
//!     println!("{} {}", task.id, task.text);
//! }
//! ```

pub mod formatting;
pub mod intent;
pub mod migration;
pub mod storage;
pub mod todo;
pub mod validation;

use tracing::{info, warn};

// Re-export commonly used types
pub use intent::Intent;
pub use storage::{FileStore, MemoryStore, PersistenceStore, StorageFormat};
pub use todo::{
    AppState, EditTarget, Filter, Priority, Task, TaskId, TaskList, Theme, Transition,
};

/// Owner of the application state
///
/// Every operation runs the matching [`AppState`] transition and then, if
/// the task list changed, writes it through the store. Operations never
/// fail: invalid input leaves the state untouched, unreadable storage loads
/// as an empty list, and failed writes are logged while the in-memory state
/// is kept.
pub struct TaskListController<S: PersistenceStore> {
    state: AppState,
    store: S,
}

impl<S: PersistenceStore> TaskListController<S> {
    /// Create a controller, loading the stored list
    ///
    /// # Example
    /// ```
    /// # use todo_list::{MemoryStore, TaskListController};
    /// let todo = TaskListController::new(MemoryStore::new());
    /// assert!(todo.state().tasks().is_empty());
    /// ```
    pub fn new(store: S) -> Self {
        let tasks = match store.load() {
            Ok(Some(tasks)) => {
                info!(tasks = tasks.len(), "loaded task list");
                tasks
            }
            Ok(None) => TaskList::new(),
            Err(e) => {
                warn!("stored task list unreadable, starting empty: {:#}", e);
                TaskList::new()
            }
        };
        Self {
            state: AppState::with_tasks(tasks),
            store,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Tasks matching the current filter, in list order
    pub fn visible(&self) -> Vec<&Task> {
        self.state.visible()
    }

    /// Apply an intent and persist the list if it changed
    pub fn dispatch(&mut self, intent: Intent) -> Transition {
        let transition = self.state.apply(intent);
        self.persist(transition);
        transition
    }

    fn persist(&self, transition: Transition) {
        let result = match transition {
            Transition::ListChanged => self.store.save(self.state.tasks()),
            Transition::ListCleared => self.store.clear(),
            Transition::Unchanged | Transition::ViewChanged => return,
        };
        if let Err(e) = result {
            warn!("failed to persist task list: {:#}", e);
        }
    }

    pub fn add(&mut self, text: &str, priority: Option<Priority>) -> Transition {
        self.dispatch(Intent::Add {
            text: Some(text.to_string()),
            priority,
        })
    }

    /// Add the contents of the input buffer
    pub fn add_from_input(&mut self) -> Transition {
        self.dispatch(Intent::Add {
            text: None,
            priority: None,
        })
    }

    pub fn set_input(&mut self, text: impl Into<String>) -> Transition {
        self.dispatch(Intent::SetInput(text.into()))
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> Transition {
        self.dispatch(Intent::ToggleComplete(id))
    }

    pub fn delete(&mut self, id: TaskId) -> Transition {
        self.dispatch(Intent::Delete(id))
    }

    pub fn start_edit(&mut self, id: TaskId) -> Transition {
        self.dispatch(Intent::StartEdit(id))
    }

    pub fn set_draft(&mut self, text: impl Into<String>) -> Transition {
        self.dispatch(Intent::SetDraft(text.into()))
    }

    pub fn save_edit(&mut self) -> Transition {
        self.dispatch(Intent::SaveEdit)
    }

    pub fn cancel_edit(&mut self) -> Transition {
        self.dispatch(Intent::CancelEdit)
    }

    pub fn set_filter(&mut self, filter: Filter) -> Transition {
        self.dispatch(Intent::SetFilter(filter))
    }

    pub fn toggle_filter(&mut self, filter: Filter) -> Transition {
        self.dispatch(Intent::ToggleFilter(filter))
    }

    pub fn set_theme(&mut self, theme: Theme) -> Transition {
        self.dispatch(Intent::SetTheme(theme))
    }

    pub fn toggle_theme(&mut self) -> Transition {
        self.dispatch(Intent::ToggleTheme)
    }

    pub fn select_priority(&mut self, priority: Priority) -> Transition {
        self.dispatch(Intent::SelectPriority(priority))
    }

    pub fn set_priority(&mut self, id: TaskId, priority: Priority) -> Transition {
        self.dispatch(Intent::SetPriority(id, priority))
    }

    pub fn clear_all(&mut self) -> Transition {
        self.dispatch(Intent::ClearAll)
    }
}
