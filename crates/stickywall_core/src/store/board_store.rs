//! Board store: the note sequence plus the editing marker.
//!
//! # Responsibility
//! - Assign note ids and keep insertion order as display order.
//! - Enforce the single-editor rule by replacement.
//! - Keep empty text out of storage on every write path.
//!
//! # Invariants
//! - Ids are never reused, even after deletions.
//! - Removing the edited note clears `editing_id` in the same call.
//! - Unknown ids turn every operation into a no-op.

use crate::model::note::{normalize_note_text, Note, NoteId};
use log::debug;
use serde::{Deserialize, Serialize};

/// Serializable snapshot of the whole board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Notes in display order.
    pub notes: Vec<Note>,
    /// Note currently shown in its edit view.
    pub editing_id: Option<NoteId>,
}

/// Result of committing an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Text replaced and editing ended.
    Saved,
    /// Text was blank, so the note was removed.
    Deleted,
    /// No note with that id exists.
    Missing,
}

/// Owner of the board state.
///
/// Constructed explicitly and handed to whoever drives the UI; there is no
/// process-wide instance.
#[derive(Debug, Clone)]
pub struct BoardStore {
    notes: Vec<Note>,
    editing_id: Option<NoteId>,
    next_id: NoteId,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    /// Creates an empty board whose first note gets id 1.
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            editing_id: None,
            next_id: 1,
        }
    }

    /// Appends a note and returns its id.
    ///
    /// Blank text creates nothing and does not consume an id.
    pub fn add(&mut self, text: &str) -> Option<NoteId> {
        let Some(text) = normalize_note_text(text) else {
            debug!("event=note_add module=store status=skipped reason=blank_text");
            return None;
        };

        let id = self.next_id;
        self.next_id += 1;
        self.notes.push(Note::new(id, text));
        debug!(
            "event=note_add module=store status=ok note_id={} count={}",
            id,
            self.notes.len()
        );
        Some(id)
    }

    /// Removes the note with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() != before;

        if self.editing_id == Some(id) {
            self.editing_id = None;
        }
        debug!(
            "event=note_remove module=store status={} note_id={}",
            if removed { "ok" } else { "noop" },
            id
        );
        removed
    }

    /// Marks `id` as the note being edited, replacing any previous editor.
    pub fn start_editing(&mut self, id: NoteId) -> bool {
        if self.get(id).is_none() {
            debug!("event=edit_start module=store status=noop note_id={id}");
            return false;
        }
        if let Some(previous) = self.editing_id.replace(id) {
            if previous != id {
                debug!("event=edit_replaced module=store previous={previous} note_id={id}");
            }
        }
        true
    }

    /// Leaves edit mode without touching any note.
    pub fn stop_editing(&mut self) {
        self.editing_id = None;
    }

    /// Replaces the text of `id` and ends editing.
    ///
    /// Text is replaced in full and surrounding whitespace is trimmed.
    /// Blank text deletes the note instead of storing an empty string.
    pub fn save_edit(&mut self, id: NoteId, new_text: &str) -> EditOutcome {
        let Some(position) = self.notes.iter().position(|note| note.id == id) else {
            debug!("event=edit_save module=store status=noop note_id={id}");
            return EditOutcome::Missing;
        };

        let Some(text) = normalize_note_text(new_text) else {
            self.remove(id);
            return EditOutcome::Deleted;
        };

        self.notes[position].text = text;
        self.editing_id = None;
        debug!("event=edit_save module=store status=ok note_id={id}");
        EditOutcome::Saved
    }

    /// Returns a copy of the notes in display order.
    pub fn notes(&self) -> Vec<Note> {
        self.notes.clone()
    }

    /// Borrows the notes without copying. Used by the renderer.
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Returns the id of the note being edited.
    pub fn editing_id(&self) -> Option<NoteId> {
        self.editing_id
    }

    /// Looks up one note.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Number of stored notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the board holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Copies the full board state.
    pub fn snapshot(&self) -> BoardState {
        BoardState {
            notes: self.notes(),
            editing_id: self.editing_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardStore, EditOutcome};

    #[test]
    fn add_does_not_consume_id_for_blank_text() {
        let mut store = BoardStore::new();
        assert_eq!(store.add("   "), None);
        assert_eq!(store.add("first"), Some(1));
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let mut store = BoardStore::new();
        let first = store.add("a").unwrap();
        let second = store.add("b").unwrap();
        store.remove(second);
        let third = store.add("c").unwrap();
        assert!(third > second);
        assert!(second > first);
    }

    #[test]
    fn start_editing_unknown_id_keeps_previous_editor() {
        let mut store = BoardStore::new();
        let id = store.add("a").unwrap();
        assert!(store.start_editing(id));
        assert!(!store.start_editing(99));
        assert_eq!(store.editing_id(), Some(id));
    }

    #[test]
    fn save_edit_with_blank_text_deletes() {
        let mut store = BoardStore::new();
        let id = store.add("a").unwrap();
        store.start_editing(id);
        assert_eq!(store.save_edit(id, " \n "), EditOutcome::Deleted);
        assert!(store.is_empty());
        assert_eq!(store.editing_id(), None);
    }

    #[test]
    fn save_edit_on_missing_note_leaves_editor_open() {
        let mut store = BoardStore::new();
        let id = store.add("a").unwrap();
        store.start_editing(id);
        assert_eq!(store.save_edit(42, "zz"), EditOutcome::Missing);
        assert_eq!(store.editing_id(), Some(id));
        assert_eq!(store.get(id).unwrap().text, "a");
    }

    #[test]
    fn notes_returns_detached_copy() {
        let mut store = BoardStore::new();
        store.add("a");
        let snapshot = store.notes();
        store.add("b");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }
}
