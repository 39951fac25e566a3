//! Full-wall reconstruction and element bookkeeping.
//!
//! # Responsibility
//! - Discard and rebuild every card on the host.
//! - Keep the element -> note registry that event handlers resolve against.
//! - Restore focus to the open editor after rebuilding.
//!
//! # Invariants
//! - The registry only ever holds handles from the latest render.
//! - A missing focus target skips focusing; the rest of the wall still renders.

use crate::dom::{CardElements, CardPart, DomHost, ElementHandle};
use crate::model::note::NoteId;
use crate::render::card::{build_cards, RenderOptions};
use crate::store::board_store::BoardStore;
use log::{debug, warn};
use std::collections::HashMap;

/// Note and card part an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardTarget {
    pub note_id: NoteId,
    pub part: CardPart,
}

/// Rebuilds the wall and maps host elements back to notes.
#[derive(Debug, Default)]
pub struct WallRenderer {
    options: RenderOptions,
    targets: HashMap<ElementHandle, CardTarget>,
    cards: HashMap<NoteId, CardElements>,
}

impl WallRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            targets: HashMap::new(),
            cards: HashMap::new(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Replaces the host wall with one card per stored note.
    ///
    /// Returns the number of cards mounted.
    pub fn render<H: DomHost>(&mut self, store: &BoardStore, host: &mut H) -> usize {
        host.clear_wall();
        self.targets.clear();
        self.cards.clear();

        let views = build_cards(store, &self.options);
        for view in &views {
            let elements = host.mount_card(view);
            for (handle, part) in elements.parts() {
                self.targets.insert(
                    handle,
                    CardTarget {
                        note_id: view.note_id,
                        part,
                    },
                );
            }
            self.cards.insert(view.note_id, elements);
        }

        if let Some(editing) = store.editing_id() {
            let focused = self
                .cards
                .get(&editing)
                .map(|elements| host.focus_at_end(elements.edit_field))
                .unwrap_or(false);
            if !focused {
                warn!("event=focus_skipped module=render status=missing_anchor note_id={editing}");
            }
        }

        debug!(
            "event=wall_render module=render status=ok cards={} editing={}",
            views.len(),
            store
                .editing_id()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "none".to_string())
        );
        views.len()
    }

    /// Resolves an event target from the latest render.
    pub fn resolve(&self, element: ElementHandle) -> Option<CardTarget> {
        self.targets.get(&element).copied()
    }

    /// Elements mounted for `note_id` in the latest render.
    pub fn elements_for(&self, note_id: NoteId) -> Option<CardElements> {
        self.cards.get(&note_id).copied()
    }
}
