//! Card projection for one note.

use crate::model::note::{Note, NoteId};
use crate::store::board_store::BoardStore;

/// Identifier prefix the browser widget used for card elements.
pub const DEFAULT_CARD_ID_PREFIX: &str = "note-task-";

/// Render-time settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix for the per-card identifier attribute.
    pub card_id_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            card_id_prefix: DEFAULT_CARD_ID_PREFIX.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn card_dom_id(&self, id: NoteId) -> String {
        format!("{}{}", self.card_id_prefix, id)
    }
}

/// Everything a host needs to draw one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub note_id: NoteId,
    /// Identifier attribute exposed to the host.
    pub dom_id: String,
    /// Shown by the text view and pre-filled into the edit field.
    pub text: String,
    pub editing: bool,
}

impl CardView {
    pub fn from_note(note: &Note, editing: bool, options: &RenderOptions) -> Self {
        Self {
            note_id: note.id,
            dom_id: options.card_dom_id(note.id),
            text: note.text.clone(),
            editing,
        }
    }

    pub fn text_hidden(&self) -> bool {
        self.editing
    }

    pub fn edit_hidden(&self) -> bool {
        !self.editing
    }
}

/// Projects the whole board, in display order.
pub fn build_cards(store: &BoardStore, options: &RenderOptions) -> Vec<CardView> {
    let editing = store.editing_id();
    store
        .iter()
        .map(|note| CardView::from_note(note, editing == Some(note.id), options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{build_cards, RenderOptions};
    use crate::store::board_store::BoardStore;

    #[test]
    fn only_the_edited_note_is_in_edit_view() {
        let mut store = BoardStore::new();
        store.add("milk");
        let eggs = store.add("eggs").unwrap();
        store.start_editing(eggs);

        let cards = build_cards(&store, &RenderOptions::default());
        assert_eq!(cards.len(), 2);
        assert!(!cards[0].editing);
        assert!(cards[1].editing);
        assert!(cards[1].text_hidden());
        assert_eq!(cards[1].dom_id, "note-task-2");
    }

    #[test]
    fn custom_prefix_is_applied() {
        let mut store = BoardStore::new();
        store.add("milk");
        let options = RenderOptions {
            card_id_prefix: "sticky-".to_string(),
        };
        assert_eq!(build_cards(&store, &options)[0].dom_id, "sticky-1");
    }
}
