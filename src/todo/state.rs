//! Application state and its transitions
//!
//! Every user action is a method on [`AppState`] that mutates the state in
//! place and reports what changed as a [`Transition`]. Nothing here touches
//! storage or the terminal; the controller in the crate root decides what
//! to persist from the returned transition.

use crate::intent::Intent;
use crate::todo::task::{Priority, Task, TaskId};
use crate::todo::task_list::TaskList;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which tasks the view shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" | "done" => Ok(Filter::Completed),
            _ => Err(format!(
                "Invalid filter '{}'. Valid options are: all, active, completed",
                s
            )),
        }
    }
}

/// Display mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "white" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!(
                "Invalid theme '{}'. Valid options are: light, dark",
                s
            )),
        }
    }
}

/// The task currently being edited and its unsaved text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub id: TaskId,
    pub draft: String,
}

/// Outcome of applying one intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed (invalid input, unknown ID, or already in that state)
    Unchanged,
    /// Only view state changed (input, edit, filter, theme, selector)
    ViewChanged,
    /// The task list changed and must be persisted
    ListChanged,
    /// The task list was emptied and storage must be cleared
    ListCleared,
}

impl Transition {
    fn view_if(changed: bool) -> Self {
        if changed {
            Transition::ViewChanged
        } else {
            Transition::Unchanged
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    tasks: TaskList,
    input: String,
    edit: Option<EditTarget>,
    filter: Filter,
    theme: Theme,
    priority: Priority,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously stored list with default view state
    pub fn with_tasks(tasks: TaskList) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn edit(&self) -> Option<&EditTarget> {
        self.edit.as_ref()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Priority given to tasks added without an explicit one
    pub fn selected_priority(&self) -> Priority {
        self.priority
    }

    /// Tasks matching the current filter, in list order
    pub fn visible(&self) -> Vec<&Task> {
        self.tasks.visible(self.filter)
    }

    /// Dispatch an intent to the matching transition
    pub fn apply(&mut self, intent: Intent) -> Transition {
        let transition = match intent {
            Intent::Add { text, priority } => self.add(text.as_deref(), priority),
            Intent::SetInput(text) => self.set_input(text),
            Intent::ToggleComplete(id) => self.toggle_complete(id),
            Intent::Delete(id) => self.delete(id),
            Intent::StartEdit(id) => self.start_edit(id),
            Intent::SetDraft(text) => self.set_draft(text),
            Intent::SaveEdit => self.save_edit(),
            Intent::CancelEdit => self.cancel_edit(),
            Intent::SetFilter(filter) => self.set_filter(filter),
            Intent::ToggleFilter(filter) => self.toggle_filter(filter),
            Intent::SetTheme(theme) => self.set_theme(theme),
            Intent::ToggleTheme => self.toggle_theme(),
            Intent::SelectPriority(priority) => self.select_priority(priority),
            Intent::SetPriority(id, priority) => self.set_priority(id, priority),
            Intent::ClearAll => self.clear_all(),
        };
        debug!(?transition, "applied intent");
        transition
    }

    /// Append a task
    ///
    /// Uses the input buffer when `text` is `None` and the priority selector
    /// when `priority` is `None`. Clears the input buffer on success; a
    /// blank text leaves everything, including the buffer, as it was.
    pub fn add(&mut self, text: Option<&str>, priority: Option<Priority>) -> Transition {
        let text = text.unwrap_or(self.input.as_str()).to_string();
        let priority = priority.unwrap_or(self.priority);
        match self.tasks.add(&text, priority) {
            Some(_) => {
                self.input.clear();
                Transition::ListChanged
            }
            None => Transition::Unchanged,
        }
    }

    pub fn set_input(&mut self, text: String) -> Transition {
        let changed = self.input != text;
        self.input = text;
        Transition::view_if(changed)
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> Transition {
        if self.tasks.toggle_complete(id) {
            Transition::ListChanged
        } else {
            Transition::Unchanged
        }
    }

    /// Remove a task, cancelling its edit if it was being edited
    pub fn delete(&mut self, id: TaskId) -> Transition {
        if self.tasks.remove(id).is_none() {
            return Transition::Unchanged;
        }
        if self.edit.as_ref().is_some_and(|e| e.id == id) {
            self.edit = None;
        }
        Transition::ListChanged
    }

    /// Begin editing a task, replacing any edit already in progress
    pub fn start_edit(&mut self, id: TaskId) -> Transition {
        let Some(task) = self.tasks.find_by_id(id) else {
            return Transition::Unchanged;
        };
        self.edit = Some(EditTarget {
            id,
            draft: task.text.clone(),
        });
        Transition::ViewChanged
    }

    pub fn set_draft(&mut self, text: String) -> Transition {
        match self.edit.as_mut() {
            Some(edit) => {
                let changed = edit.draft != text;
                edit.draft = text;
                Transition::view_if(changed)
            }
            None => Transition::Unchanged,
        }
    }

    /// Commit the draft of the active edit
    ///
    /// A blank draft is refused and the edit stays open.
    pub fn save_edit(&mut self) -> Transition {
        let Some(edit) = self.edit.as_ref() else {
            return Transition::Unchanged;
        };
        if edit.draft.trim().is_empty() {
            return Transition::Unchanged;
        }
        let (id, draft) = (edit.id, edit.draft.clone());
        self.edit = None;
        if self.tasks.rename(id, &draft) {
            Transition::ListChanged
        } else {
            Transition::ViewChanged
        }
    }

    pub fn cancel_edit(&mut self) -> Transition {
        Transition::view_if(self.edit.take().is_some())
    }

    pub fn set_filter(&mut self, filter: Filter) -> Transition {
        let changed = self.filter != filter;
        self.filter = filter;
        Transition::view_if(changed)
    }

    /// Select `filter`, or go back to showing everything if it is already
    /// selected
    pub fn toggle_filter(&mut self, filter: Filter) -> Transition {
        let next = if self.filter == filter {
            Filter::All
        } else {
            filter
        };
        self.set_filter(next)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Transition {
        let changed = self.theme != theme;
        self.theme = theme;
        Transition::view_if(changed)
    }

    pub fn toggle_theme(&mut self) -> Transition {
        self.theme = self.theme.toggled();
        debug!(theme = %self.theme, "theme toggled");
        Transition::ViewChanged
    }

    pub fn select_priority(&mut self, priority: Priority) -> Transition {
        let changed = self.priority != priority;
        self.priority = priority;
        Transition::view_if(changed)
    }

    pub fn set_priority(&mut self, id: TaskId, priority: Priority) -> Transition {
        if self.tasks.set_priority(id, priority) {
            Transition::ListChanged
        } else {
            Transition::Unchanged
        }
    }

    /// Drop every task and any edit in progress
    pub fn clear_all(&mut self) -> Transition {
        self.tasks.clear();
        self.edit = None;
        Transition::ListCleared
    }
}
