//! Transition-table behavior of the store across realistic event flows.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use citeburst_store::{Action, Selection, Store, StoreError};
use citeburst_tree::Citation;

fn cite(
    id: &str,
    year: i32,
    pubs: u64,
    department: &str,
    faculty: &str,
    university: &str,
) -> Citation {
    Citation {
        id: id.into(),
        name: format!("Person {id}"),
        year,
        pubs,
        department: department.into(),
        faculty: faculty.into(),
        university: university.into(),
    }
}

fn records() -> Vec<Citation> {
    vec![
        cite("1", 2020, 5, "CS (CS)", "Engineering (Eng)", "MIT (MIT)"),
        cite("2", 2021, 3, "CS (CS)", "Engineering (Eng)", "MIT (MIT)"),
        cite("3", 2019, 2, "Biology (Bio)", "Science (Sci)", "ETH Zurich (ETH)"),
        cite("1", 2022, 4, "CS (CS)", "Engineering (Eng)", "MIT (MIT)"),
    ]
}

fn loaded_store() -> Store {
    let mut store = Store::new();
    store.dispatch(Action::LoadRaw(records())).unwrap();
    store
}

#[test]
fn load_then_navigate_then_reload() {
    let mut store = loaded_store();
    assert_eq!(store.state().raw().len(), 4);
    assert_eq!(store.state().full_tree().root().value, 14);

    store.on_node_clicked("fEng").unwrap();
    assert_eq!(store.state().root_id(), "fEng");
    assert_eq!(store.state().root_parent_path(), ["uMIT", "/"]);

    // A reload resets navigation to the full tree.
    store.dispatch(Action::LoadRaw(records())).unwrap();
    assert_eq!(store.state().root_id(), "/");
    assert!(store.state().root_parent_path().is_empty());
    assert_eq!(
        store.state().derived_tree().map(|t| t.len()),
        Some(store.state().full_tree().len())
    );
}

#[test]
fn derived_root_tracks_root_id_across_sequences() {
    let mut store = loaded_store();
    for id in ["uMIT", "dCS", "uETH", "/"] {
        store.on_row_selected(id).unwrap();
        let derived = store.state().derived_tree().unwrap();
        assert_eq!(derived.root_id(), id);
        assert_eq!(store.state().root_id(), id);
    }
}

#[test]
fn stale_id_after_reload_is_rejected_atomically() {
    let mut store = loaded_store();
    store.on_node_clicked("uETH").unwrap();

    // Reload with MIT-only data; the old ETH id is now stale.
    store
        .dispatch(Action::LoadRaw(vec![cite(
            "1", 2020, 5, "CS (CS)", "Engineering (Eng)", "MIT (MIT)",
        )]))
        .unwrap();
    let before_root = store.state().root_id().to_string();

    let err = store.on_node_clicked("uETH").unwrap_err();
    assert_eq!(err, StoreError::NotFound { id: "uETH".into() });
    assert_eq!(store.state().root_id(), before_root);
    assert!(store.state().derived_tree().is_some());
}

#[test]
fn hover_chain_feeds_ancestor_highlighting() {
    let mut store = loaded_store();
    store.on_node_hovered(Some("p3_2019".into())).unwrap();

    let parents = store.state().hovered_node_parent_ids().unwrap();
    let expected: HashSet<String> = ["dBio", "fSci", "uETH", "/"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(parents, &expected);

    store.on_node_hovered(None).unwrap();
    assert!(store.state().hovered_node_id().is_none());
    assert!(store.state().hovered_node_parent_ids().is_none());
}

#[test]
fn selection_change_keeps_root_and_hover() {
    let mut store = loaded_store();
    store.on_node_clicked("uMIT").unwrap();
    store.on_node_hovered(Some("dCS".into())).unwrap();

    let mut fully: HashSet<String> = store
        .state()
        .full_tree()
        .ids()
        .map(str::to_string)
        .collect();
    fully.remove("p1_2020");
    store
        .on_selection_changed(Selection::new(fully, HashSet::new()))
        .unwrap();

    // SelectIds invalidates the derived tree only.
    assert_eq!(store.state().root_id(), "uMIT");
    assert_eq!(store.state().hovered_node_id(), Some("dCS"));
    let derived = store.state().derived_tree().unwrap();
    assert!(!derived.contains("p1_2020"));
    assert!(derived.contains("p2_2021"));
}

#[test]
fn chart_view_follows_navigation() {
    let mut store = loaded_store();
    store.on_node_clicked("dCS").unwrap();

    let nodes = store.chart_nodes();
    // dCS plus p1_2020, p2_2021, p1_2022.
    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes[0].id, "dCS");
    assert_eq!(nodes[0].parent, None);
    assert_eq!(nodes[0].grouped_value, Some(12));
    let leaf_sum: u64 = nodes[1..].iter().filter_map(|n| n.value).sum();
    assert_eq!(leaf_sum, 12);
}

#[test]
fn rejected_dispatch_logs_without_panicking() {
    // Install a capturing subscriber so the warn path is exercised.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let mut store = loaded_store();
    assert!(store.on_node_clicked("no-such-node").is_err());
    assert_eq!(store.state().root_id(), "/");
}

#[test]
fn subscribers_see_every_terminal_state_in_order() {
    let mut store = Store::new();
    let roots: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&roots);
    store.subscribe(move |state| sink.borrow_mut().push(state.root_id().to_string()));

    store.dispatch(Action::LoadRaw(records())).unwrap();
    store.on_node_clicked("uMIT").unwrap();
    store.on_node_hovered(Some("dCS".into())).unwrap();
    store.on_node_clicked("dCS").unwrap();

    assert_eq!(roots.borrow().as_slice(), ["/", "uMIT", "uMIT", "dCS"]);
}
