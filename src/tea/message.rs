//! Messages for the TEA (The Elm Architecture) pattern.
//!
//! Messages are inputs to the update function. Keyboard events arrive as
//! `Key` and are translated into the domain messages below.

use crossterm::event::KeyEvent;

use crate::core::{Filter, TaskId};

/// Input messages to the update function.
#[derive(Debug, Clone)]
pub enum Message {
    // Keyboard/terminal events
    Key(KeyEvent),
    Resize(u16, u16),

    // Task store mutations
    AddTask(String),
    ToggleTask(TaskId),
    EditTask {
        id: TaskId,
        title: String,
    },
    DeleteTask(TaskId),

    // Edit dialog
    /// Open the edit dialog for a task (ignored for done or missing tasks).
    BeginEdit(TaskId),
    CancelEdit,

    // Projection
    SetFilter(Filter),
    SetSearch(String),
}
