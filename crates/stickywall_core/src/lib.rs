//! Core of the sticky-notes wall.
//! Owns the board state, the wall renderer and the gesture handlers; hosts
//! only supply elements and deliver events.

pub mod controller;
pub mod dom;
pub mod logging;
pub mod model;
pub mod render;
pub mod store;

pub use controller::{Gesture, WallController};
pub use dom::memory::{ElementKind, Focus};
pub use dom::{CardElements, CardPart, DomEvent, DomHost, ElementHandle, Key, MemoryDom};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{normalize_note_text, Note, NoteId};
pub use render::card::{build_cards, CardView, RenderOptions, DEFAULT_CARD_ID_PREFIX};
pub use render::wall::{CardTarget, WallRenderer};
pub use store::board_store::{BoardState, BoardStore, EditOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
