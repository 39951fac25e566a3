//! Document host abstraction.
//!
//! # Responsibility
//! - Describe the few element operations the wall needs from its host.
//! - Define the events a host delivers back to the controller.
//!
//! # Invariants
//! - Handles are opaque and only meaningful to the host that issued them.
//! - A handle from a discarded render may still arrive in an event; callers
//!   must treat it as unknown rather than fail.

pub mod memory;

use crate::render::card::CardView;

pub use memory::MemoryDom;

/// Opaque reference to one host element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementHandle(u64);

impl ElementHandle {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Which part of a card an element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardPart {
    /// Card container.
    Card,
    /// Delete affordance.
    DeleteButton,
    /// Read-only text view.
    TextView,
    /// Multi-line edit field.
    EditField,
}

/// Element handles produced by mounting one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardElements {
    pub card: ElementHandle,
    pub delete_button: ElementHandle,
    pub text_view: ElementHandle,
    pub edit_field: ElementHandle,
}

impl CardElements {
    /// Pairs every handle with the part it plays.
    pub fn parts(&self) -> [(ElementHandle, CardPart); 4] {
        [
            (self.card, CardPart::Card),
            (self.delete_button, CardPart::DeleteButton),
            (self.text_view, CardPart::TextView),
            (self.edit_field, CardPart::EditField),
        ]
    }
}

/// Keyboard keys the wall reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    /// Anything else; left to the host's default handling.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(value: &str) -> Self {
        match value {
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// Event delivered by the host, addressed to the element it hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEvent {
    KeyDown {
        target: ElementHandle,
        key: Key,
        shift: bool,
    },
    Click {
        target: ElementHandle,
    },
    DoubleClick {
        target: ElementHandle,
    },
}

/// Element operations the renderer and handlers need from a document host.
pub trait DomHost {
    /// Free-text field used to compose new notes.
    fn new_note_input(&self) -> ElementHandle;
    /// Element standing for "anywhere else" in the document.
    fn document_body(&self) -> ElementHandle;
    /// Current value of a text control, `None` when the element is gone.
    fn value_of(&self, element: ElementHandle) -> Option<String>;
    /// Replaces the value of a text control. Unknown elements are ignored.
    fn set_value(&mut self, element: ElementHandle, value: &str);
    /// Discards every card element in the wall container.
    fn clear_wall(&mut self);
    /// Builds and appends one card to the end of the wall.
    fn mount_card(&mut self, card: &CardView) -> CardElements;
    /// Focuses an element and puts the caret after its last character.
    ///
    /// Returns `false` when the element does not exist.
    fn focus_at_end(&mut self, element: ElementHandle) -> bool;
}
