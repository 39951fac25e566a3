//! Wall rendering.
//!
//! # Responsibility
//! - Project board state into card views.
//! - Rebuild the host wall from scratch on every call and remember which
//!   element belongs to which note.
//!
//! # Invariants
//! - Rendering the same board twice yields the same wall.
//! - Only elements from the latest render resolve to a note.

pub mod card;
pub mod wall;
