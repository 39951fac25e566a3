//! FFI use-case API for the embedding UI host.
//!
//! # Responsibility
//! - Expose wall gestures as sync calls addressed by note id.
//! - Return a full wall snapshot after every call so the host can redraw.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One wall session per process; calls are serialized by a mutex.

use log::warn;
use stickywall_core::{
    build_cards, core_version as core_version_inner, init_logging as init_logging_inner,
    DomHost, Gesture, Key, MemoryDom, WallController,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

static SESSION: OnceLock<Mutex<WallController<MemoryDom>>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory for rolling log files.
///
/// # FFI contract
/// - Idempotent for the same `level + log_dir`.
/// - Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One card as the host should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSnapshot {
    pub note_id: u64,
    /// Identifier attribute for the card element.
    pub dom_id: String,
    pub text: String,
    /// Whether the card shows its edit field instead of its text.
    pub editing: bool,
}

/// Wall state returned by every wall call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallSnapshot {
    /// Cards in display order.
    pub cards: Vec<CardSnapshot>,
    pub editing_id: Option<u64>,
    /// Current content of the new-note field.
    pub new_note_text: String,
    /// Current content of the open edit field, if any.
    pub edit_text: Option<String>,
    /// Whether the call changed the wall.
    pub changed: bool,
}

/// Drops every note and starts a fresh board with id 1.
#[flutter_rust_bridge::frb(sync)]
pub fn wall_reset() -> WallSnapshot {
    let mut session = session();
    *session = WallController::new(MemoryDom::new());
    snapshot(&session, true)
}

/// Returns the current wall without changing it.
#[flutter_rust_bridge::frb(sync)]
pub fn wall_snapshot() -> WallSnapshot {
    snapshot(&session(), false)
}

/// Mirrors the host's new-note field content.
#[flutter_rust_bridge::frb(sync)]
pub fn wall_type_new_note(text: String) -> WallSnapshot {
    apply(Gesture::TypeNewNote(text))
}

/// Enter in the new-note field. `shift` keeps composing.
#[flutter_rust_bridge::frb(sync)]
pub fn wall_submit_new_note(shift: bool) -> WallSnapshot {
    apply(Gesture::SubmitNewNote { shift })
}

/// Double-click on a card.
#[flutter_rust_bridge::frb(sync)]
pub fn wall_double_click(note_id: u64) -> WallSnapshot {
    apply(Gesture::DoubleClick(note_id))
}

/// Click on a card's delete button.
#[flutter_rust_bridge::frb(sync)]
pub fn wall_delete(note_id: u64) -> WallSnapshot {
    apply(Gesture::Delete(note_id))
}

/// Mirrors the open edit field content.
#[flutter_rust_bridge::frb(sync)]
pub fn wall_type_edit(text: String) -> WallSnapshot {
    apply(Gesture::TypeEdit(text))
}

/// Key press inside the open edit field; `key` uses DOM key names.
#[flutter_rust_bridge::frb(sync)]
pub fn wall_edit_key(key: String, shift: bool) -> WallSnapshot {
    apply(Gesture::EditKey {
        key: Key::from_dom_key(key.as_str()),
        shift,
    })
}

/// Click anywhere outside the open edit field.
#[flutter_rust_bridge::frb(sync)]
pub fn wall_click_outside() -> WallSnapshot {
    apply(Gesture::ClickOutside)
}

fn session() -> MutexGuard<'static, WallController<MemoryDom>> {
    let lock = SESSION.get_or_init(|| Mutex::new(WallController::new(MemoryDom::new())));
    lock.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_lock module=ffi status=recovered reason=poisoned");
        poisoned.into_inner()
    })
}

fn apply(gesture: Gesture) -> WallSnapshot {
    let mut session = session();
    let changed = session.apply(gesture);
    snapshot(&session, changed)
}

fn snapshot(controller: &WallController<MemoryDom>, changed: bool) -> WallSnapshot {
    let store = controller.store();
    let host = controller.host();
    let cards = build_cards(store, controller.renderer().options())
        .into_iter()
        .map(|card| CardSnapshot {
            note_id: card.note_id,
            dom_id: card.dom_id,
            text: card.text,
            editing: card.editing,
        })
        .collect();
    let edit_text = store
        .editing_id()
        .and_then(|id| controller.renderer().elements_for(id))
        .and_then(|elements| host.value_of(elements.edit_field));

    WallSnapshot {
        cards,
        editing_id: store.editing_id(),
        new_note_text: host.value_of(host.new_note_input()).unwrap_or_default(),
        edit_text,
        changed,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, wall_click_outside, wall_delete, wall_double_click,
        wall_edit_key, wall_reset, wall_snapshot, wall_submit_new_note, wall_type_edit,
        wall_type_new_note,
    };
    use std::sync::Mutex;

    // Tests share the process-wide session.
    static SERIAL: Mutex<()> = Mutex::new(());

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        assert!(!init_logging("verbose".to_string(), "/tmp/logs".to_string()).is_empty());
    }

    #[test]
    fn create_edit_and_delete_through_bridge() {
        let _guard = SERIAL.lock().unwrap_or_else(|p| p.into_inner());
        wall_reset();

        wall_type_new_note("milk".to_string());
        let created = wall_submit_new_note(false);
        assert!(created.changed);
        assert_eq!(created.cards.len(), 1);
        assert_eq!(created.cards[0].dom_id, "note-task-1");
        assert_eq!(created.new_note_text, "");

        let editing = wall_double_click(1);
        assert_eq!(editing.editing_id, Some(1));
        assert_eq!(editing.edit_text.as_deref(), Some("milk"));

        wall_type_edit("oat milk".to_string());
        let saved = wall_edit_key("Escape".to_string(), false);
        assert_eq!(saved.editing_id, None);
        assert_eq!(saved.cards[0].text, "oat milk");

        let deleted = wall_delete(1);
        assert!(deleted.cards.is_empty());
    }

    #[test]
    fn outside_click_and_reset_restart_ids() {
        let _guard = SERIAL.lock().unwrap_or_else(|p| p.into_inner());
        wall_reset();

        wall_type_new_note("a".to_string());
        wall_submit_new_note(false);
        wall_double_click(1);
        wall_type_edit("b".to_string());
        let committed = wall_click_outside();
        assert_eq!(committed.cards[0].text, "b");
        assert!(!committed.cards[0].editing);

        let fresh = wall_reset();
        assert!(fresh.cards.is_empty());
        wall_type_new_note("c".to_string());
        let snapshot = wall_submit_new_note(false);
        assert_eq!(snapshot.cards[0].note_id, 1);
        assert_eq!(wall_snapshot(), snapshot_without_change(&snapshot));
    }

    fn snapshot_without_change(snapshot: &super::WallSnapshot) -> super::WallSnapshot {
        let mut copy = snapshot.clone();
        copy.changed = false;
        copy
    }
}
