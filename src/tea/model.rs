//! Model for the TEA (The Elm Architecture) pattern.
//!
//! The Model is pure application state - no channels, no handles, no runtime infrastructure.

use crate::config::Config;
use crate::core::{project, Filter, LogObserver, Summary, Task, TaskId, TaskStore};
use crate::render::{next_version, RenderState, TaskView};

/// Application UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    List,
    Input(InputKind),
    /// Edit dialog open for this task.
    Edit(TaskId),
}

/// Single-line text fields on the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    NewTask,
    Search,
}

impl InputKind {
    pub fn label(&self) -> &'static str {
        match self {
            InputKind::NewTask => "Add task",
            InputKind::Search => "Search",
        }
    }
}

/// Pure application state - the single source of truth.
pub struct Model {
    // Core state
    pub store: TaskStore,
    /// Index into the current projection, not the full collection.
    pub selected: usize,
    pub mode: Mode,

    // Projection state
    pub filter: Filter,
    pub search: String,

    // Input state
    pub input_buffer: String,
    pub edit_buffer: String,

    // UI toggle state
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,

    // Config (immutable after init)
    pub config: Config,
}

impl Model {
    pub fn new(config: Config) -> Self {
        let mut store = TaskStore::new();
        store.subscribe(Box::new(LogObserver));

        Self {
            store,
            selected: 0,
            mode: Mode::default(),
            filter: config.default_filter,
            search: String::new(),
            input_buffer: String::new(),
            edit_buffer: String::new(),
            show_keymap: config.show_keymap,
            dirty: true,
            config,
        }
    }

    /// Tasks currently shown, after filter and search.
    pub fn visible(&self) -> Vec<&Task> {
        project(self.store.tasks(), self.filter, &self.search)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible().get(self.selected).copied()
    }

    pub fn summary(&self) -> Summary {
        Summary::of(self.store.tasks())
    }

    /// Keep `selected` inside the projection.
    pub fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Create an immutable snapshot for the render thread.
    ///
    /// Each snapshot gets a monotonically increasing version number so the
    /// render thread can skip redundant frames.
    pub fn snapshot(&self) -> RenderState {
        let rows: Vec<TaskView> = self.visible().into_iter().map(TaskView::from).collect();

        RenderState {
            version: next_version(),
            rows,
            selected: self.selected,
            mode: self.mode,
            filter: self.filter,
            search: self.search.clone(),
            input_buffer: self.input_buffer.clone(),
            edit_buffer: self.edit_buffer.clone(),
            summary: self.summary(),
            show_keymap: self.show_keymap,
        }
    }
}
