use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Stable identifier of a task
///
/// Assigned from the list's counter when the task is created and never
/// reused within that list. Displayed and parsed as `#<n>` (the `#` is
/// optional when parsing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        match digits.parse::<u32>() {
            Ok(n) if n > 0 => Ok(TaskId(n)),
            _ => Err(format!(
                "Invalid task ID '{}'. Use the number shown in the list (e.g., '3' or '#3')",
                s
            )),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high",
                s
            )),
        }
    }
}

/// A single to-do entry
///
/// `text` is always trimmed and non-empty; [`crate::todo::TaskList`] is the
/// only place tasks are created or edited and it enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    /// Date when the task was created
    pub created_at: NaiveDate,
    /// Date when the task was last changed
    pub updated_at: NaiveDate,
}

impl Task {
    pub(crate) fn new(id: TaskId, text: String, priority: Priority) -> Self {
        let today = local_date_today();
        Self {
            id,
            text,
            completed: false,
            priority,
            created_at: today,
            updated_at: today,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = local_date_today();
    }
}
