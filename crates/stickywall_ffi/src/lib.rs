//! Host bridge for embedding the sticky wall in a Flutter UI.

pub mod api;
