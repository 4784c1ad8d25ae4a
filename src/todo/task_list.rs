use crate::todo::state::Filter;
use crate::todo::task::{Priority, Task, TaskId};
use crate::validation::normalize_task_text;

/// Current on-disk format version
pub const FORMAT_VERSION: u32 = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    /// Tasks in insertion order
    ///
    /// Completion and priority changes mutate in place, so the order the
    /// user added tasks in is the order they are listed and stored in.
    pub(crate) tasks: Vec<Task>,

    /// Counter for generating unique task IDs
    pub task_counter: u32,
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TaskList {
    /// Create a new empty TaskList instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique task ID
    ///
    /// Returns `None` once the counter has reached `u32::MAX`; IDs are never
    /// wrapped or reused.
    pub(crate) fn generate_task_id(&mut self) -> Option<TaskId> {
        self.task_counter = self.task_counter.checked_add(1)?;
        Some(TaskId(self.task_counter))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Find a task by its ID
    pub fn find_by_id(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn find_by_id_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Append a new incomplete task
    ///
    /// # Returns
    /// The new task's ID, or `None` if `text` is blank after trimming or no
    /// IDs are left
    pub fn add(&mut self, text: &str, priority: Priority) -> Option<TaskId> {
        let text = normalize_task_text(text)?;
        let id = self.generate_task_id()?;
        self.tasks.push(Task::new(id, text, priority));
        Some(id)
    }

    /// Flip the completion flag of a task
    ///
    /// # Returns
    /// `true` if the task exists
    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.find_by_id_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                task.touch();
                true
            }
            None => false,
        }
    }

    /// Remove a task from the list and return it
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Replace the text of a task
    ///
    /// Returns `false` without touching the task when `text` is blank or the
    /// task does not exist.
    pub fn rename(&mut self, id: TaskId, text: &str) -> bool {
        let Some(text) = normalize_task_text(text) else {
            return false;
        };
        match self.find_by_id_mut(id) {
            Some(task) => {
                task.text = text;
                task.touch();
                true
            }
            None => false,
        }
    }

    /// Change the priority of a task without moving it
    pub fn set_priority(&mut self, id: TaskId, priority: Priority) -> bool {
        match self.find_by_id_mut(id) {
            Some(task) => {
                task.priority = priority;
                task.touch();
                true
            }
            None => false,
        }
    }

    /// Tasks matching `filter`, in list order
    pub fn visible(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_active()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Remove every task and reset the ID counter
    pub fn clear(&mut self) {
        self.tasks.clear();
        self.task_counter = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(list: &TaskList) -> Vec<&str> {
        list.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_task_list_new() {
        let list = TaskList::new();
        assert!(list.is_empty());
        assert_eq!(list.task_counter, 0);
    }

    #[test]
    fn test_add_trims_text() {
        let mut list = TaskList::new();
        let id = list.add("  buy milk  ", Priority::Medium).unwrap();
        assert_eq!(id, TaskId(1));
        assert_eq!(list.find_by_id(id).unwrap().text, "buy milk");
    }

    #[test]
    fn test_add_blank_is_rejected() {
        let mut list = TaskList::new();
        assert!(list.add("", Priority::Medium).is_none());
        assert!(list.add(" \t\n ", Priority::Medium).is_none());
        assert!(list.is_empty());
        assert_eq!(list.task_counter, 0);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut list = TaskList::new();
        let a = list.add("a", Priority::Medium).unwrap();
        let b = list.add("b", Priority::Medium).unwrap();
        list.remove(b);
        let c = list.add("c", Priority::Medium).unwrap();
        assert_eq!(a, TaskId(1));
        assert_eq!(c, TaskId(3));
        assert_eq!(texts(&list), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_missing_returns_none() {
        let mut list = TaskList::new();
        list.add("a", Priority::Medium);
        assert!(list.remove(TaskId(42)).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_toggle_complete() {
        let mut list = TaskList::new();
        let id = list.add("a", Priority::Medium).unwrap();
        assert!(list.toggle_complete(id));
        assert!(list.find_by_id(id).unwrap().completed);
        assert!(list.toggle_complete(id));
        assert!(!list.find_by_id(id).unwrap().completed);
        assert!(!list.toggle_complete(TaskId(9)));
    }

    #[test]
    fn test_rename_rejects_blank() {
        let mut list = TaskList::new();
        let id = list.add("a", Priority::Medium).unwrap();
        assert!(!list.rename(id, "   "));
        assert_eq!(list.find_by_id(id).unwrap().text, "a");
        assert!(list.rename(id, " b "));
        assert_eq!(list.find_by_id(id).unwrap().text, "b");
    }

    #[test]
    fn test_set_priority_keeps_order() {
        let mut list = TaskList::new();
        list.add("a", Priority::Low);
        let b = list.add("b", Priority::Low).unwrap();
        list.add("c", Priority::Low);
        assert!(list.set_priority(b, Priority::High));
        assert_eq!(texts(&list), vec!["a", "b", "c"]);
        assert_eq!(list.find_by_id(b).unwrap().priority, Priority::High);
    }

    #[test]
    fn test_visible_filters_preserve_order() {
        let mut list = TaskList::new();
        for text in ["one", "two", "three", "four", "five"] {
            list.add(text, Priority::Medium);
        }
        list.toggle_complete(TaskId(2));
        list.toggle_complete(TaskId(4));

        let active: Vec<&str> = list
            .visible(Filter::Active)
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(active, vec!["one", "three", "five"]);

        let completed: Vec<&str> = list
            .visible(Filter::Completed)
            .iter()
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(completed, vec!["two", "four"]);

        assert_eq!(list.visible(Filter::All).len(), 5);
        assert_eq!(list.active_count(), 3);
        assert_eq!(list.completed_count(), 2);
    }

    #[test]
    fn test_add_declined_when_ids_exhausted() {
        let mut list = TaskList::new();
        list.task_counter = u32::MAX - 1;
        assert_eq!(list.add("last", Priority::Medium), Some(TaskId(u32::MAX)));
        assert_eq!(list.add("one too many", Priority::Medium), None);
        assert_eq!(list.len(), 1);
        assert_eq!(list.task_counter, u32::MAX);
    }

    #[test]
    fn test_clear_resets_counter() {
        let mut list = TaskList::new();
        list.add("a", Priority::Medium);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.add("b", Priority::Medium), Some(TaskId(1)));
    }
}
