//! To-do domain models and state transitions
//!
//! - `task`: a single task, its ID and priority
//! - `task_list`: the ordered, persisted list of tasks
//! - `state`: the full application state and every user-facing transition
//! - `serde_impl`: storage (de)serialization for `TaskList`

mod serde_impl;
mod state;
mod task;
mod task_list;

pub use state::{AppState, EditTarget, Filter, Theme, Transition};
pub use task::{Priority, Task, TaskId, local_date_today};
pub use task_list::{FORMAT_VERSION, TaskList};
