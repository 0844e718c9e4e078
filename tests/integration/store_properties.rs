//! Mutation guarantees of the task store.

use std::sync::{Arc, Mutex};

use todo::core::{StoreEvent, StoreObserver, Summary, Task};
use todo::{TaskId, TaskStore};

use crate::fixtures::seeded_store;

#[test]
fn test_blank_add_leaves_collection_unchanged() {
    let (mut store, _) = seeded_store(&[("Buy milk", false)]);
    let before: Vec<Task> = store.tasks().to_vec();

    for blank in ["", " ", "\t", "  \n  "] {
        assert_eq!(store.add(blank), None);
    }

    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn test_add_then_read_yields_one_open_task() {
    let mut store = TaskStore::new();
    store.add("Buy milk");

    let tasks = store.tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "Buy milk");
    assert!(!tasks[0].is_done);
}

#[test]
fn test_double_toggle_is_identity() {
    let (mut store, ids) = seeded_store(&[("a", false), ("b", true)]);
    for id in &ids {
        let before = store.get(*id).unwrap().is_done;
        store.toggle(*id);
        assert_ne!(store.get(*id).unwrap().is_done, before);
        store.toggle(*id);
        assert_eq!(store.get(*id).unwrap().is_done, before);
    }
}

#[test]
fn test_delete_removes_exactly_that_id() {
    let (mut store, ids) = seeded_store(&[("a", false), ("b", false), ("c", true)]);

    assert!(store.delete(ids[1]));
    assert_eq!(store.len(), 2);
    let remaining: Vec<TaskId> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![ids[0], ids[2]]);

    assert!(!store.delete(ids[1]));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_edit_keeps_identity_and_completion() {
    let (mut store, ids) = seeded_store(&[("Buy milk", true)]);
    store.edit(ids[0], "Buy two milks");

    let task = store.get(ids[0]).unwrap();
    assert_eq!(task.id, ids[0]);
    assert_eq!(task.title, "Buy two milks");
    assert!(task.is_done);
}

#[test]
fn test_summary_sums_to_size_for_any_mutation_sequence() {
    let mut store = TaskStore::new();
    let mut ids = Vec::new();

    // Deterministic pseudo-random walk over the four operations
    let mut seed: u32 = 7;
    for step in 0..200 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let pick = (seed >> 16) as usize;
        match pick % 4 {
            0 => {
                if let Some(id) = store.add(&format!("task {step}")) {
                    ids.push(id);
                }
            }
            1 if !ids.is_empty() => {
                store.toggle(ids[pick % ids.len()]);
            }
            2 if !ids.is_empty() => {
                store.edit(ids[pick % ids.len()], "renamed");
            }
            3 if !ids.is_empty() => {
                let id = ids.remove(pick % ids.len());
                store.delete(id);
            }
            _ => {}
        }

        let summary = Summary::of(store.tasks());
        assert_eq!(summary.completed + summary.active, store.len());
        assert_eq!(store.len(), ids.len());
    }
}

struct Counter(Arc<Mutex<Vec<StoreEvent>>>);

impl StoreObserver for Counter {
    fn on_change(&mut self, event: &StoreEvent, _tasks: &[Task]) {
        self.0.lock().unwrap().push(*event);
    }
}

#[test]
fn test_observers_are_notified_in_registration_order() {
    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));
    let mut store = TaskStore::new();
    store.subscribe(Box::new(Counter(first.clone())));

    let early = store.add("before second observer").unwrap();
    store.subscribe(Box::new(Counter(second.clone())));
    let late = store.add("after").unwrap();
    store.toggle(TaskId::new());

    assert_eq!(
        *first.lock().unwrap(),
        vec![StoreEvent::Added(early), StoreEvent::Added(late)]
    );
    assert_eq!(*second.lock().unwrap(), vec![StoreEvent::Added(late)]);
}
