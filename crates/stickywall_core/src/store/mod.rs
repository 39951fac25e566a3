//! In-memory board state.
//!
//! # Responsibility
//! - Own the ordered note sequence and the single editing marker.
//! - Expose synchronous mutations that never fail.
//!
//! # Invariants
//! - Note ids are pairwise distinct and strictly increasing in insertion order.
//! - `editing_id`, when set, always references a stored note.

pub mod board_store;
