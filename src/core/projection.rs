//! Filter and search projection over the task collection.
//!
//! Pure functions only. The screen re-derives the projection from the
//! full collection on every snapshot.

use serde::{Deserialize, Serialize};

use super::task::Task;

/// Completion-state selector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl Filter {
    /// Selector order as shown on screen.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Completed, Filter::Incomplete];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.is_done,
            Filter::Incomplete => !task.is_done,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Incomplete => "Incomplete",
        }
    }

    /// Cycle to the next selector (`f` key).
    pub fn next(&self) -> Filter {
        match self {
            Filter::All => Filter::Completed,
            Filter::Completed => Filter::Incomplete,
            Filter::Incomplete => Filter::All,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Tasks matching both the completion filter and the search string,
/// in collection order.
pub fn project<'a>(tasks: &'a [Task], filter: Filter, search: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| filter.matches(t) && t.title_contains(search))
        .collect()
}

/// Completed/active counts over a whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub completed: usize,
    pub active: usize,
}

impl Summary {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.is_done).count();
        Self {
            completed,
            active: tasks.len() - completed,
        }
    }

    pub fn total(&self) -> usize {
        self.completed + self.active
    }
}
