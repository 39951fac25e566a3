//! In-process document host.
//!
//! Keeps a flat element table instead of a real tree: the wall is the only
//! container with dynamic children, and cards always have the same four parts.

use super::{CardElements, DomHost, ElementHandle};
use crate::render::card::CardView;
use std::collections::BTreeMap;
use std::fmt::Write as _;

const DELETE_GLYPH: &str = "\u{1f5d1}";

/// Kind of element stored by [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Body,
    NewNoteInput,
    Card,
    DeleteButton,
    TextView,
    EditField,
}

#[derive(Debug, Clone)]
struct MemoryElement {
    kind: ElementKind,
    dom_id: Option<String>,
    /// Text content for views, value for input controls.
    content: String,
    hidden: bool,
}

impl MemoryElement {
    fn new(kind: ElementKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            dom_id: None,
            content: content.into(),
            hidden: false,
        }
    }
}

/// Focused element and caret offset in UTF-16 code units, as a browser
/// selection range reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub element: ElementHandle,
    pub caret: usize,
}

/// Document host that lives entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    elements: BTreeMap<ElementHandle, MemoryElement>,
    wall: Vec<CardElements>,
    body: ElementHandle,
    input: ElementHandle,
    focus: Option<Focus>,
    next_handle: u64,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Creates a document with an empty wall and an empty new-note field.
    pub fn new() -> Self {
        let mut dom = Self {
            elements: BTreeMap::new(),
            wall: Vec::new(),
            body: ElementHandle(0),
            input: ElementHandle(0),
            focus: None,
            next_handle: 1,
        };
        dom.body = dom.insert(MemoryElement::new(ElementKind::Body, ""));
        let mut input = MemoryElement::new(ElementKind::NewNoteInput, "");
        input.dom_id = Some("new-note".to_string());
        dom.input = dom.insert(input);
        dom
    }

    fn insert(&mut self, element: MemoryElement) -> ElementHandle {
        let handle = ElementHandle(self.next_handle);
        self.next_handle += 1;
        self.elements.insert(handle, element);
        handle
    }

    /// Returns whether `element` is still part of the document.
    pub fn contains(&self, element: ElementHandle) -> bool {
        self.elements.contains_key(&element)
    }

    pub fn kind_of(&self, element: ElementHandle) -> Option<ElementKind> {
        self.elements.get(&element).map(|el| el.kind)
    }

    pub fn is_hidden(&self, element: ElementHandle) -> Option<bool> {
        self.elements.get(&element).map(|el| el.hidden)
    }

    /// Text content of a view element.
    pub fn text_of(&self, element: ElementHandle) -> Option<&str> {
        self.elements.get(&element).map(|el| el.content.as_str())
    }

    pub fn dom_id_of(&self, element: ElementHandle) -> Option<&str> {
        self.elements
            .get(&element)
            .and_then(|el| el.dom_id.as_deref())
    }

    /// Cards currently mounted, in wall order.
    pub fn cards(&self) -> &[CardElements] {
        &self.wall
    }

    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    /// Serializes the wall container to markup.
    ///
    /// Output depends only on what is displayed, never on handle values, so
    /// two renders of the same board produce the same string.
    pub fn wall_html(&self) -> String {
        let mut out = String::from("<div id=\"notes-wall\">");
        for card in &self.wall {
            let Some(root) = self.elements.get(&card.card) else {
                continue;
            };
            let _ = write!(
                out,
                "<div class=\"note\" id=\"{}\">",
                escape_html(root.dom_id.as_deref().unwrap_or_default())
            );
            let _ = write!(out, "<button class=\"delete-btn\">{DELETE_GLYPH}</button>");
            if let Some(view) = self.elements.get(&card.text_view) {
                let _ = write!(
                    out,
                    "<div class=\"{}\">{}</div>",
                    class_list("note-text", view.hidden),
                    escape_html(&view.content)
                );
            }
            if let Some(edit) = self.elements.get(&card.edit_field) {
                let _ = write!(
                    out,
                    "<textarea class=\"{}\">{}</textarea>",
                    class_list("note-edit", edit.hidden),
                    escape_html(&edit.content)
                );
            }
            out.push_str("</div>");
        }
        out.push_str("</div>");
        out
    }
}

impl DomHost for MemoryDom {
    fn new_note_input(&self) -> ElementHandle {
        self.input
    }

    fn document_body(&self) -> ElementHandle {
        self.body
    }

    fn value_of(&self, element: ElementHandle) -> Option<String> {
        self.elements.get(&element).and_then(|el| match el.kind {
            ElementKind::NewNoteInput | ElementKind::EditField => Some(el.content.clone()),
            _ => None,
        })
    }

    fn set_value(&mut self, element: ElementHandle, value: &str) {
        if let Some(el) = self.elements.get_mut(&element) {
            if matches!(el.kind, ElementKind::NewNoteInput | ElementKind::EditField) {
                el.content = value.to_string();
            }
        }
    }

    fn clear_wall(&mut self) {
        for card in std::mem::take(&mut self.wall) {
            for (handle, _) in card.parts() {
                self.elements.remove(&handle);
            }
        }
        if let Some(focus) = self.focus {
            if !self.elements.contains_key(&focus.element) {
                self.focus = None;
            }
        }
    }

    fn mount_card(&mut self, card: &CardView) -> CardElements {
        let mut root = MemoryElement::new(ElementKind::Card, "");
        root.dom_id = Some(card.dom_id.clone());

        let mut text_view = MemoryElement::new(ElementKind::TextView, card.text.as_str());
        text_view.hidden = card.text_hidden();

        let mut edit_field = MemoryElement::new(ElementKind::EditField, card.text.as_str());
        edit_field.hidden = card.edit_hidden();

        let elements = CardElements {
            card: self.insert(root),
            delete_button: self.insert(MemoryElement::new(ElementKind::DeleteButton, DELETE_GLYPH)),
            text_view: self.insert(text_view),
            edit_field: self.insert(edit_field),
        };
        self.wall.push(elements);
        elements
    }

    fn focus_at_end(&mut self, element: ElementHandle) -> bool {
        let Some(el) = self.elements.get(&element) else {
            return false;
        };
        self.focus = Some(Focus {
            element,
            caret: el.content.encode_utf16().count(),
        });
        true
    }
}

fn class_list(base: &str, hidden: bool) -> String {
    if hidden {
        format!("{base} hidden")
    } else {
        base.to_string()
    }
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{escape_html, ElementKind, MemoryDom};
    use crate::dom::DomHost;
    use crate::render::card::CardView;

    fn card(id: u64, text: &str, editing: bool) -> CardView {
        CardView {
            note_id: id,
            dom_id: format!("note-task-{id}"),
            text: text.to_string(),
            editing,
        }
    }

    #[test]
    fn mount_card_hides_the_inactive_view() {
        let mut dom = MemoryDom::new();
        let viewing = dom.mount_card(&card(1, "a", false));
        let editing = dom.mount_card(&card(2, "b", true));

        assert_eq!(dom.is_hidden(viewing.text_view), Some(false));
        assert_eq!(dom.is_hidden(viewing.edit_field), Some(true));
        assert_eq!(dom.is_hidden(editing.text_view), Some(true));
        assert_eq!(dom.is_hidden(editing.edit_field), Some(false));
        assert_eq!(dom.value_of(editing.edit_field).as_deref(), Some("b"));
        assert_eq!(dom.dom_id_of(editing.card), Some("note-task-2"));
    }

    #[test]
    fn clear_wall_discards_cards_and_their_focus() {
        let mut dom = MemoryDom::new();
        let mounted = dom.mount_card(&card(1, "a", true));
        assert!(dom.focus_at_end(mounted.edit_field));

        dom.clear_wall();
        assert!(dom.cards().is_empty());
        assert!(!dom.contains(mounted.card));
        assert_eq!(dom.focus(), None);
        assert_eq!(dom.kind_of(dom.new_note_input()), Some(ElementKind::NewNoteInput));
    }

    #[test]
    fn focus_caret_counts_utf16_units() {
        let mut dom = MemoryDom::new();
        let mounted = dom.mount_card(&card(1, "h\u{e9}\u{1f600}", true));
        assert!(dom.focus_at_end(mounted.edit_field));
        assert_eq!(dom.focus().unwrap().caret, 4);
    }

    #[test]
    fn set_value_ignores_non_input_elements() {
        let mut dom = MemoryDom::new();
        let mounted = dom.mount_card(&card(1, "a", false));
        dom.set_value(mounted.text_view, "changed");
        assert_eq!(dom.text_of(mounted.text_view), Some("a"));
        assert_eq!(dom.value_of(mounted.text_view), None);
    }

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(escape_html("<a href=\"x\">&</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}
