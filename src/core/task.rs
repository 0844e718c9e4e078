//! Task data model.
//!
//! A task is a single to-do entry. Tasks are created and owned by the
//! [`TaskStore`](super::store::TaskStore); nothing else holds on to them.

use uuid::Uuid;

/// Unique identifier for a task.
///
/// Uses UUID v4 for generation and provides a short form display
/// for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Create a new unique task identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Return first 8 characters of the UUID for display.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Stable identity, unchanged by edits and toggles.
    pub id: TaskId,
    pub title: String,
    pub is_done: bool,
}

impl Task {
    /// Create a new, not yet completed task with a fresh id.
    pub fn new(title: &str) -> Self {
        Self {
            id: TaskId::new(),
            title: title.to_string(),
            is_done: false,
        }
    }

    /// Flip the completion flag.
    pub fn toggle(&mut self) {
        self.is_done = !self.is_done;
    }

    /// Case-insensitive substring match on the title.
    ///
    /// An empty needle matches every task.
    pub fn title_contains(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle.to_lowercase())
    }
}
