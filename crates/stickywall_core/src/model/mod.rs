//! Board domain model.
//!
//! # Responsibility
//! - Define the note record held by the board store.
//! - Own text normalization shared by every write path.
//!
//! # Invariants
//! - Every note is identified by a `NoteId` that is never reused.
//! - Stored note text is trimmed and never empty.

pub mod note;
