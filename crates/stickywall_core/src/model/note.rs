//! Note domain model.
//!
//! # Responsibility
//! - Define the single user-authored record shown as one card.
//! - Normalize raw input text before it reaches the store.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused after deletion.
//! - `text` is non-empty once stored.

use serde::{Deserialize, Serialize};

/// Store-assigned note identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = u64;

/// One sticky note on the wall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Monotonic id, starting at 1.
    pub id: NoteId,
    /// Trimmed, non-empty body text. May contain newlines.
    pub text: String,
}

impl Note {
    /// Creates a note from already normalized text.
    ///
    /// Callers outside the store should go through [`normalize_note_text`]
    /// first; this constructor does not re-check emptiness.
    pub fn new(id: NoteId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Trims raw input and returns `None` when nothing is left.
///
/// Interior whitespace and newlines are preserved.
pub fn normalize_note_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
