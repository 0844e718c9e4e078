use crate::core::{Filter, Summary, Task, TaskId};
use crate::tea::Mode;
use std::sync::atomic::{AtomicU64, Ordering};

/// One row of the task list as the UI sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub id: TaskId,
    pub title: String,
    pub is_done: bool,
}

impl TaskView {
    /// Edit action is offered only for tasks that are not done.
    pub fn can_edit(&self) -> bool {
        !self.is_done
    }
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            is_done: task.is_done,
        }
    }
}

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(1);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone)]
pub struct RenderState {
    pub version: u64,
    /// Current projection, in collection order.
    pub rows: Vec<TaskView>,
    pub selected: usize,
    pub mode: Mode,
    pub filter: Filter,
    pub search: String,
    pub input_buffer: String,
    pub edit_buffer: String,
    /// Counts over the full collection.
    pub summary: Summary,
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,
}

impl RenderState {
    pub fn selected_row(&self) -> Option<&TaskView> {
        self.rows.get(self.selected)
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            version: 0,
            rows: Vec::new(),
            selected: 0,
            mode: Mode::List,
            filter: Filter::All,
            search: String::new(),
            input_buffer: String::new(),
            edit_buffer: String::new(),
            summary: Summary::default(),
            show_keymap: false,
        }
    }
}
