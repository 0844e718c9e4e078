//! Test fixtures for integration tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use todo::config::Config;
use todo::tea::{update, Command, Message, Model};
use todo::{TaskId, TaskStore};

/// A store seeded with `(title, is_done)` pairs, in order.
pub fn seeded_store(entries: &[(&str, bool)]) -> (TaskStore, Vec<TaskId>) {
    let mut store = TaskStore::new();
    let ids = entries
        .iter()
        .map(|(title, done)| {
            let id = store.add(title).expect("seed titles are not blank");
            if *done {
                store.toggle(id);
            }
            id
        })
        .collect();
    (store, ids)
}

/// A model with default config.
pub fn model() -> Model {
    Model::new(Config::default())
}

/// Press a single key, returning the commands it produced.
pub fn press(model: &mut Model, code: KeyCode) -> Vec<Command> {
    update(model, Message::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

/// Type a string one character at a time.
pub fn type_text(model: &mut Model, text: &str) {
    for c in text.chars() {
        press(model, KeyCode::Char(c));
    }
}

/// Add a task through the add form, as a user would.
pub fn add_via_keys(model: &mut Model, title: &str) {
    press(model, KeyCode::Char('a'));
    type_text(model, title);
    press(model, KeyCode::Enter);
}
