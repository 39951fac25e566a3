//! Top-level wall controller.
//!
//! # Responsibility
//! - Own the board store, the renderer and the document host.
//! - Route host events to handlers, then re-render once per handled event.
//!
//! # Invariants
//! - Handlers receive the store explicitly; nothing reaches for global state.
//! - Every event is handled to completion before the next one is accepted.

pub mod gesture;
pub mod handlers;

use crate::dom::{CardPart, DomEvent, DomHost};
use crate::render::card::RenderOptions;
use crate::render::wall::WallRenderer;
use crate::store::board_store::BoardStore;

pub use gesture::Gesture;

/// Single owner of the board state for one wall.
#[derive(Debug)]
pub struct WallController<H: DomHost> {
    store: BoardStore,
    renderer: WallRenderer,
    host: H,
}

impl<H: DomHost> WallController<H> {
    /// Creates a controller over an empty board and renders the empty wall.
    pub fn new(host: H) -> Self {
        Self::with_options(host, RenderOptions::default())
    }

    pub fn with_options(host: H, options: RenderOptions) -> Self {
        Self::with_store(host, BoardStore::new(), options)
    }

    /// Creates a controller over an existing board.
    pub fn with_store(host: H, store: BoardStore, options: RenderOptions) -> Self {
        let mut controller = Self {
            store,
            renderer: WallRenderer::new(options),
            host,
        };
        controller.render();
        controller
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Direct host access, e.g. to simulate typing into a field.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn renderer(&self) -> &WallRenderer {
        &self.renderer
    }

    /// Rebuilds the wall from the current store state.
    pub fn render(&mut self) {
        self.renderer.render(&self.store, &mut self.host);
    }

    /// Handles one host event. Returns whether the board was re-rendered.
    pub fn dispatch(&mut self, event: DomEvent) -> bool {
        let changed = match event {
            DomEvent::KeyDown { target, key, shift } => {
                if target == self.host.new_note_input() {
                    handlers::handle_new_note_key(&mut self.store, &mut self.host, key, shift)
                } else {
                    match self.renderer.resolve(target) {
                        Some(card) if card.part == CardPart::EditField => handlers::handle_edit_key(
                            &mut self.store,
                            &self.host,
                            card.note_id,
                            target,
                            key,
                            shift,
                        ),
                        _ => false,
                    }
                }
            }
            DomEvent::Click { target } => {
                handlers::handle_click(&mut self.store, &self.host, &self.renderer, target)
            }
            DomEvent::DoubleClick { target } => {
                handlers::handle_double_click(&mut self.store, self.renderer.resolve(target))
            }
        };

        if changed {
            self.render();
        }
        changed
    }
}
