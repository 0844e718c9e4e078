//! Keyboard-driven sessions through `update` and `snapshot`.

use crossterm::event::KeyCode;

use todo::core::{Filter, Summary};
use todo::tea::{Command, InputKind, Mode};

use crate::fixtures::{add_via_keys, model, press, type_text};

#[test]
fn test_add_toggle_filter_search_session() {
    let mut model = model();
    add_via_keys(&mut model, "Buy milk");
    add_via_keys(&mut model, "Eggs");
    add_via_keys(&mut model, "Buy more milk");

    // Mark "Eggs" done: selection follows the last add, move up one
    press(&mut model, KeyCode::Up);
    press(&mut model, KeyCode::Char(' '));

    let state = model.snapshot();
    assert_eq!(state.summary, Summary { completed: 1, active: 2 });

    press(&mut model, KeyCode::Char('3'));
    press(&mut model, KeyCode::Char('/'));
    type_text(&mut model, "more");
    press(&mut model, KeyCode::Enter);

    let state = model.snapshot();
    assert_eq!(state.filter, Filter::Incomplete);
    assert_eq!(state.search, "more");
    assert_eq!(state.rows.len(), 1);
    assert_eq!(state.rows[0].title, "Buy more milk");
    assert_eq!(state.selected, 0);
    // Summary ignores the projection
    assert_eq!(state.summary.total(), 3);
}

#[test]
fn test_edit_dialog_round_trip() {
    let mut model = model();
    add_via_keys(&mut model, "Call mom");
    let id = model.store.tasks()[0].id;

    press(&mut model, KeyCode::Char('e'));
    assert_eq!(model.snapshot().mode, Mode::Edit(id));
    assert_eq!(model.snapshot().edit_buffer, "Call mom");

    type_text(&mut model, " tonight");
    press(&mut model, KeyCode::Enter);

    let state = model.snapshot();
    assert_eq!(state.mode, Mode::List);
    assert_eq!(state.rows[0].title, "Call mom tonight");
    assert_eq!(state.rows[0].id, id);
}

#[test]
fn test_edit_is_not_offered_for_done_tasks() {
    let mut model = model();
    add_via_keys(&mut model, "Done thing");
    press(&mut model, KeyCode::Char('x'));
    press(&mut model, KeyCode::Char('e'));

    let state = model.snapshot();
    assert_eq!(state.mode, Mode::List);
    assert!(!state.rows[0].can_edit());
}

#[test]
fn test_deleting_everything_keeps_selection_valid() {
    let mut model = model();
    for title in ["one", "two", "three", "four"] {
        add_via_keys(&mut model, title);
    }
    press(&mut model, KeyCode::Char('k'));

    for _ in 0..6 {
        press(&mut model, KeyCode::Char('d'));
        let state = model.snapshot();
        assert!(state.rows.is_empty() || state.selected < state.rows.len());
    }
    assert!(model.store.is_empty());
}

#[test]
fn test_typing_in_add_form_does_not_trigger_list_keys() {
    let mut model = model();
    press(&mut model, KeyCode::Char('a'));
    assert_eq!(model.mode, Mode::Input(InputKind::NewTask));

    type_text(&mut model, "quit and delete");
    assert!(model.store.is_empty());
    let cmds = press(&mut model, KeyCode::Enter);
    assert!(cmds.is_empty());
    assert_eq!(model.store.tasks()[0].title, "quit and delete");

    assert_eq!(press(&mut model, KeyCode::Char('q')), vec![Command::Quit]);
}
