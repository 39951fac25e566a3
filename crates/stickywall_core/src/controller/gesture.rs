//! Note-addressed gestures for scripted hosts.
//!
//! Scripts and bridges know note ids, not element handles. Each gesture is
//! translated into the event a browser would deliver against the current
//! render, so it goes through exactly the same handlers.

use super::WallController;
use crate::dom::{CardElements, DomEvent, DomHost, ElementHandle, Key};
use crate::model::note::NoteId;
use log::debug;

/// One user gesture, addressed by note id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// Replace the content of the new-note field.
    TypeNewNote(String),
    /// Press Enter in the new-note field.
    SubmitNewNote { shift: bool },
    /// Double-click the text of a card.
    DoubleClick(NoteId),
    /// Click the delete button of a card.
    Delete(NoteId),
    /// Replace the content of the open edit field.
    TypeEdit(String),
    /// Press a key inside the open edit field.
    EditKey { key: Key, shift: bool },
    /// Click on empty document space.
    ClickOutside,
}

impl<H: DomHost> WallController<H> {
    /// Applies one gesture. Returns whether the wall was re-rendered.
    pub fn apply(&mut self, gesture: Gesture) -> bool {
        match gesture {
            Gesture::TypeNewNote(text) => {
                let input = self.host().new_note_input();
                self.host_mut().set_value(input, &text);
                false
            }
            Gesture::SubmitNewNote { shift } => {
                let target = self.host().new_note_input();
                self.dispatch(DomEvent::KeyDown {
                    target,
                    key: Key::Enter,
                    shift,
                })
            }
            Gesture::DoubleClick(note_id) => {
                // A browser delivers a click before the double-click, which
                // commits any other open editor first.
                let Some(elements) = self.renderer().elements_for(note_id) else {
                    debug!("event=gesture module=controller status=skipped kind=dblclick note_id={note_id}");
                    return false;
                };
                // An open editor covers its card, so both events land in it.
                let target_of = |elements: CardElements, editing: bool| {
                    if editing {
                        elements.edit_field
                    } else {
                        elements.text_view
                    }
                };
                let editing = self.store().editing_id() == Some(note_id);
                let clicked = self.dispatch(DomEvent::Click {
                    target: target_of(elements, editing),
                });
                let opened = match self.renderer().elements_for(note_id) {
                    Some(elements) => self.dispatch(DomEvent::DoubleClick {
                        target: target_of(elements, editing),
                    }),
                    None => false,
                };
                clicked || opened
            }
            Gesture::Delete(note_id) => match self.renderer().elements_for(note_id) {
                Some(elements) => self.dispatch(DomEvent::Click {
                    target: elements.delete_button,
                }),
                None => {
                    debug!("event=gesture module=controller status=skipped kind=delete note_id={note_id}");
                    false
                }
            },
            Gesture::TypeEdit(text) => {
                if let Some(field) = self.open_edit_field() {
                    self.host_mut().set_value(field, &text);
                }
                false
            }
            Gesture::EditKey { key, shift } => match self.open_edit_field() {
                Some(target) => self.dispatch(DomEvent::KeyDown { target, key, shift }),
                None => false,
            },
            Gesture::ClickOutside => {
                let target = self.host().document_body();
                self.dispatch(DomEvent::Click { target })
            }
        }
    }

    fn open_edit_field(&self) -> Option<ElementHandle> {
        let editing = self.store().editing_id()?;
        self.renderer()
            .elements_for(editing)
            .map(|elements| elements.edit_field)
    }
}
