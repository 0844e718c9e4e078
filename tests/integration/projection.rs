//! Filter + search over a live store.

use todo::core::{project, Filter};

use crate::fixtures::seeded_store;

#[test]
fn test_completed_milk_yields_only_done_milk() {
    let (store, ids) = seeded_store(&[("Buy milk", false), ("Buy milk", true), ("Eggs", true)]);

    let result = project(store.tasks(), Filter::Completed, "milk");

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, ids[1]);
    assert_eq!(result[0].title, "Buy milk");
    assert!(result[0].is_done);
}

#[test]
fn test_every_filter_with_empty_search_partitions_collection() {
    let (store, _) = seeded_store(&[("a", false), ("b", true), ("c", false), ("d", true)]);

    let all = project(store.tasks(), Filter::All, "").len();
    let done = project(store.tasks(), Filter::Completed, "").len();
    let open = project(store.tasks(), Filter::Incomplete, "").len();

    assert_eq!(all, store.len());
    assert_eq!(done + open, all);
}

#[test]
fn test_projection_follows_store_mutations() {
    let (mut store, ids) = seeded_store(&[("Water plants", false), ("Pay rent", false)]);

    assert!(project(store.tasks(), Filter::Completed, "").is_empty());
    store.toggle(ids[0]);
    let done = project(store.tasks(), Filter::Completed, "");
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].id, ids[0]);

    store.edit(ids[1], "Pay RENT twice");
    let hits = project(store.tasks(), Filter::All, "rent");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Pay RENT twice");
}
