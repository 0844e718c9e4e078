//! Update function for the TEA (The Elm Architecture) pattern.
//!
//! The update function takes a model and a message, mutates the model,
//! and returns a list of commands to execute. Key events are translated
//! into domain messages and dispatched through the same function, so every
//! store mutation goes through exactly one match arm.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Filter;
use crate::{tlog_debug, tlog_trace, tlog_warn};

use super::command::Command;
use super::message::Message;
use super::model::{InputKind, Mode, Model};

/// Model + Message → Commands
///
/// This function:
/// 1. Takes the current model and an input message
/// 2. Mutates the model state (and sets dirty flag)
/// 3. Returns a list of commands (side effects) to execute
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return cmds;
            }
            tlog_trace!("Message::Key {:?} mode={:?}", key.code, model.mode);
            model.dirty = true; // Keyboard input always triggers render

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                cmds.push(Command::Quit);
                return cmds;
            }

            match model.mode {
                Mode::List => update_list_mode(model, key, &mut cmds),
                Mode::Input(kind) => update_input_mode(model, key, kind, &mut cmds),
                Mode::Edit(_) => update_edit_mode(model, key, &mut cmds),
            }
        }

        Message::Resize(_, _) => {
            model.dirty = true;
        }

        Message::AddTask(title) => {
            if let Some(id) = model.store.add(&title) {
                // Follow the new task if the current projection shows it
                if let Some(pos) = model.visible().iter().position(|t| t.id == id) {
                    model.selected = pos;
                }
                model.dirty = true;
            } else {
                tlog_debug!("Message::AddTask ignored blank title");
            }
        }

        Message::ToggleTask(id) => {
            if model.store.toggle(id) {
                model.dirty = true;
            }
        }

        Message::EditTask { id, title } => {
            if model.store.edit(id, &title) {
                model.dirty = true;
            } else {
                tlog_warn!("Message::EditTask unknown id={}", id.short());
            }
            if model.mode == Mode::Edit(id) {
                close_edit_dialog(model);
            }
        }

        Message::DeleteTask(id) => {
            if model.store.delete(id) {
                model.dirty = true;
            }
            if model.mode == Mode::Edit(id) {
                close_edit_dialog(model);
            }
        }

        Message::BeginEdit(id) => match model.store.get(id) {
            Some(task) if !task.is_done => {
                tlog_debug!("Message::BeginEdit id={}", id.short());
                model.edit_buffer = task.title.clone();
                model.mode = Mode::Edit(id);
                model.dirty = true;
            }
            _ => {
                tlog_debug!("Message::BeginEdit ignored id={}", id.short());
            }
        },

        Message::CancelEdit => {
            close_edit_dialog(model);
        }

        Message::SetFilter(filter) => {
            tlog_debug!("Message::SetFilter {}", filter);
            model.filter = filter;
            model.dirty = true;
        }

        Message::SetSearch(search) => {
            model.search = search;
            model.dirty = true;
        }
    }

    model.clamp_selection();
    cmds
}

fn close_edit_dialog(model: &mut Model) {
    model.edit_buffer.clear();
    model.mode = Mode::List;
    model.dirty = true;
}

fn dispatch(model: &mut Model, msg: Message, cmds: &mut Vec<Command>) {
    cmds.extend(update(model, msg));
}

fn update_list_mode(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    let visible_len = model.visible().len();
    let selected_id = model.selected_task().map(|t| t.id);

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if visible_len > 0 {
                model.selected = (model.selected + 1) % visible_len;
            }
        }

        KeyCode::Char('k') | KeyCode::Up => {
            if visible_len > 0 {
                model.selected = model.selected.checked_sub(1).unwrap_or(visible_len - 1);
            }
        }

        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = selected_id {
                dispatch(model, Message::ToggleTask(id), cmds);
            }
        }

        KeyCode::Char('a') | KeyCode::Char('n') => {
            model.mode = Mode::Input(InputKind::NewTask);
            model.input_buffer.clear();
        }

        KeyCode::Char('/') => {
            model.mode = Mode::Input(InputKind::Search);
        }

        KeyCode::Char('e') => {
            if let Some(id) = selected_id {
                dispatch(model, Message::BeginEdit(id), cmds);
            }
        }

        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = selected_id {
                dispatch(model, Message::DeleteTask(id), cmds);
            }
        }

        KeyCode::Char('f') => {
            let next = model.filter.next();
            dispatch(model, Message::SetFilter(next), cmds);
        }

        KeyCode::Char(c @ '1'..='3') => {
            let idx = (c as usize) - ('1' as usize);
            dispatch(model, Message::SetFilter(Filter::ALL[idx]), cmds);
        }

        KeyCode::Char('?') => {
            model.show_keymap = !model.show_keymap;
        }

        KeyCode::Char('q') | KeyCode::Esc => {
            cmds.push(Command::Quit);
        }

        _ => {}
    }
}

fn update_input_mode(model: &mut Model, key: KeyEvent, kind: InputKind, cmds: &mut Vec<Command>) {
    match kind {
        InputKind::NewTask => match key.code {
            KeyCode::Enter => {
                let title = std::mem::take(&mut model.input_buffer);
                model.mode = Mode::List;
                dispatch(model, Message::AddTask(title), cmds);
            }
            KeyCode::Esc => {
                model.input_buffer.clear();
                model.mode = Mode::List;
            }
            KeyCode::Backspace => {
                model.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                model.input_buffer.push(c);
            }
            _ => {}
        },

        // The query is applied as it is typed
        InputKind::Search => match key.code {
            KeyCode::Enter => {
                model.mode = Mode::List;
            }
            KeyCode::Esc => {
                model.mode = Mode::List;
                dispatch(model, Message::SetSearch(String::new()), cmds);
            }
            KeyCode::Backspace => {
                let mut search = model.search.clone();
                search.pop();
                dispatch(model, Message::SetSearch(search), cmds);
            }
            KeyCode::Char(c) => {
                let mut search = model.search.clone();
                search.push(c);
                dispatch(model, Message::SetSearch(search), cmds);
            }
            _ => {}
        },
    }
}

fn update_edit_mode(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    let Mode::Edit(id) = model.mode else {
        return;
    };

    match key.code {
        KeyCode::Enter => {
            let title = model.edit_buffer.clone();
            dispatch(model, Message::EditTask { id, title }, cmds);
        }
        KeyCode::Esc => {
            dispatch(model, Message::CancelEdit, cmds);
        }
        KeyCode::Backspace => {
            model.edit_buffer.pop();
        }
        KeyCode::Char(c) => {
            model.edit_buffer.push(c);
        }
        _ => {}
    }
}
