use stickywall_core::{BoardState, BoardStore, EditOutcome, Note};

fn texts(store: &BoardStore) -> Vec<(u64, String)> {
    store
        .notes()
        .into_iter()
        .map(|note| (note.id, note.text))
        .collect()
}

#[test]
fn ids_are_distinct_and_strictly_increasing() {
    let mut store = BoardStore::new();
    let mut previous = 0;
    for idx in 0..50 {
        let id = store.add(&format!("note {idx}")).unwrap();
        assert!(id > previous);
        previous = id;
        if idx % 3 == 0 {
            store.remove(id);
        }
    }

    let notes = store.notes();
    for pair in notes.windows(2) {
        assert!(pair[0].id < pair[1].id);
    }
}

#[test]
fn start_editing_replaces_previous_editor() {
    let mut store = BoardStore::new();
    let x = store.add("x").unwrap();
    let y = store.add("y").unwrap();

    store.start_editing(x);
    store.start_editing(y);
    assert_eq!(store.editing_id(), Some(y));

    store.stop_editing();
    assert_eq!(store.editing_id(), None);
}

#[test]
fn removing_the_edited_note_clears_editing() {
    let mut store = BoardStore::new();
    let id = store.add("draft").unwrap();
    store.start_editing(id);

    assert!(store.remove(id));
    assert_eq!(store.editing_id(), None);
    assert!(!store.remove(id));
}

#[test]
fn removing_another_note_keeps_editing() {
    let mut store = BoardStore::new();
    let kept = store.add("kept").unwrap();
    let other = store.add("other").unwrap();
    store.start_editing(kept);

    store.remove(other);
    assert_eq!(store.editing_id(), Some(kept));
}

#[test]
fn round_trip_edit_replaces_text() {
    let mut store = BoardStore::new();
    let k = store.add("hello").unwrap();
    store.start_editing(k);

    assert_eq!(store.save_edit(k, "world"), EditOutcome::Saved);
    assert_eq!(store.notes(), vec![Note::new(k, "world")]);
    assert_eq!(store.editing_id(), None);
}

#[test]
fn blank_save_never_stores_empty_text() {
    let mut store = BoardStore::new();
    let id = store.add("hello").unwrap();
    store.start_editing(id);

    assert_eq!(store.save_edit(id, ""), EditOutcome::Deleted);
    assert!(store.notes().iter().all(|note| note.id != id));
    assert!(store.notes().iter().all(|note| !note.text.is_empty()));
}

#[test]
fn shopping_list_scenario() {
    let mut store = BoardStore::new();
    store.add("milk");
    assert_eq!(texts(&store), vec![(1, "milk".to_string())]);

    store.add("eggs");
    assert_eq!(
        texts(&store),
        vec![(1, "milk".to_string()), (2, "eggs".to_string())]
    );

    store.start_editing(1);
    assert_eq!(store.editing_id(), Some(1));

    store.save_edit(1, "almond milk");
    assert_eq!(
        texts(&store),
        vec![(1, "almond milk".to_string()), (2, "eggs".to_string())]
    );
    assert_eq!(store.editing_id(), None);

    store.remove(2);
    assert_eq!(texts(&store), vec![(1, "almond milk".to_string())]);
}

#[test]
fn whitespace_only_add_creates_nothing() {
    let mut store = BoardStore::new();
    assert_eq!(store.add("  "), None);
    assert!(store.notes().is_empty());
}

#[test]
fn stale_ids_are_noops() {
    let mut store = BoardStore::new();
    store.add("only");

    assert!(!store.remove(9));
    assert!(!store.start_editing(9));
    assert_eq!(store.save_edit(9, "ghost"), EditOutcome::Missing);
    assert_eq!(texts(&store), vec![(1, "only".to_string())]);
}

#[test]
fn snapshot_serializes_notes_and_editing_id() {
    let mut store = BoardStore::new();
    let id = store.add("milk").unwrap();
    store.start_editing(id);

    let json = serde_json::to_value(store.snapshot()).unwrap();
    assert_eq!(json["editing_id"], 1);
    assert_eq!(json["notes"][0]["text"], "milk");

    let decoded: BoardState = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, store.snapshot());
}
