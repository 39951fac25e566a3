//! Gesture handlers.
//!
//! Each handler mutates the store it is given and reports whether the wall
//! needs rebuilding. None of them fail: stale targets and blank text become
//! no-ops or deletions.

use crate::dom::{CardPart, DomHost, ElementHandle, Key};
use crate::model::note::NoteId;
use crate::render::wall::{CardTarget, WallRenderer};
use crate::store::board_store::{BoardStore, EditOutcome};
use log::debug;

fn is_commit_key(key: Key, shift: bool) -> bool {
    match key {
        Key::Enter => !shift,
        Key::Escape => true,
        Key::Other => false,
    }
}

/// Enter in the new-note field: add the trimmed text, then clear the field.
///
/// Shift+Enter is left to the field so it can insert a newline.
pub fn handle_new_note_key<H: DomHost>(
    store: &mut BoardStore,
    host: &mut H,
    key: Key,
    shift: bool,
) -> bool {
    if key != Key::Enter || shift {
        return false;
    }

    let input = host.new_note_input();
    let raw = host.value_of(input).unwrap_or_default();
    if store.add(&raw).is_none() {
        debug!("event=note_create module=handlers status=skipped reason=blank_input");
    }
    host.set_value(input, "");
    true
}

/// Enter or Escape inside an edit field commits that edit.
pub fn handle_edit_key<H: DomHost>(
    store: &mut BoardStore,
    host: &H,
    note_id: NoteId,
    edit_field: ElementHandle,
    key: Key,
    shift: bool,
) -> bool {
    if !is_commit_key(key, shift) {
        return false;
    }
    if store.editing_id() != Some(note_id) {
        debug!("event=edit_commit module=handlers status=skipped reason=not_editing note_id={note_id}");
        return false;
    }

    let text = host.value_of(edit_field).unwrap_or_default();
    commit_edit(store, note_id, &text);
    true
}

/// Double-click on a card body opens its editor, replacing any other.
///
/// Clicks on the delete button or inside the edit field do not count.
pub fn handle_double_click(store: &mut BoardStore, target: Option<CardTarget>) -> bool {
    let Some(target) = target else {
        return false;
    };
    match target.part {
        CardPart::Card | CardPart::TextView => {}
        CardPart::DeleteButton | CardPart::EditField => return false,
    }
    if store.editing_id() == Some(target.note_id) {
        return false;
    }
    store.start_editing(target.note_id)
}

/// Any click outside the open edit field commits it; a click on a delete
/// button then removes that card.
pub fn handle_click<H: DomHost>(
    store: &mut BoardStore,
    host: &H,
    renderer: &WallRenderer,
    target: ElementHandle,
) -> bool {
    let mut changed = false;

    if let Some(editing) = store.editing_id() {
        let open_field = renderer
            .elements_for(editing)
            .map(|elements| elements.edit_field);
        if open_field != Some(target) {
            match open_field.and_then(|field| host.value_of(field)) {
                Some(text) => {
                    commit_edit(store, editing, &text);
                }
                None => store.stop_editing(),
            }
            changed = true;
        }
    }

    if let Some(CardTarget {
        note_id,
        part: CardPart::DeleteButton,
    }) = renderer.resolve(target)
    {
        changed |= store.remove(note_id);
    }

    changed
}

/// Saves non-blank text, deletes the note otherwise.
pub fn commit_edit(store: &mut BoardStore, note_id: NoteId, raw_text: &str) -> EditOutcome {
    let outcome = store.save_edit(note_id, raw_text);
    if outcome == EditOutcome::Missing {
        store.stop_editing();
    }
    debug!("event=edit_commit module=handlers outcome={outcome:?} note_id={note_id}");
    outcome
}
