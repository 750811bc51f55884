//! src/controller/key_map.rs
//! ============================================================================
//! # Key map
//!
//! Translates terminal events into [`Action`]s. Printable characters always go
//! to the search box, so commands live on control chords and special keys.

use crossterm::event::{Event as TerminalEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::controller::actions::Action;

/// Rows skipped by PageUp / PageDown.
pub const PAGE_STEP: isize = 10;

#[must_use]
pub fn map_event(event: &TerminalEvent) -> Option<Action> {
    match event {
        TerminalEvent::Key(key) => map_key(key),
        TerminalEvent::Resize(width, height) => Some(Action::Resize(*width, *height)),
        _ => None,
    }
}

#[must_use]
pub fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c' | 'q'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Some(Action::ClearQuery),
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Some(Action::CopyUrl),
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Some(Action::Download),

        (KeyCode::Esc, _) => Some(Action::ClearQuery),
        (KeyCode::Enter, _) => Some(Action::CopyUrl),
        (KeyCode::Backspace, _) => Some(Action::DeleteChar),

        (KeyCode::Up, _) => Some(Action::MoveSelection(-1)),
        (KeyCode::Down, _) => Some(Action::MoveSelection(1)),
        (KeyCode::PageUp, _) => Some(Action::MoveSelection(-PAGE_STEP)),
        (KeyCode::PageDown, _) => Some(Action::MoveSelection(PAGE_STEP)),
        (KeyCode::Home, _) => Some(Action::SelectFirst),
        (KeyCode::End, _) => Some(Action::SelectLast),

        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            Some(Action::InsertChar(c))
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn printable_characters_edit_the_query() {
        assert!(matches!(
            map_key(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::InsertChar('q'))
        ));
        assert!(matches!(
            map_key(&key(KeyCode::Char('P'), KeyModifiers::SHIFT)),
            Some(Action::InsertChar('P'))
        ));
        assert!(matches!(
            map_key(&key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Action::DeleteChar)
        ));
    }

    #[test]
    fn escape_clears_search() {
        assert!(matches!(
            map_key(&key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::ClearQuery)
        ));
    }

    #[test]
    fn control_chords_run_commands() {
        assert!(matches!(
            map_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        ));
        assert!(matches!(
            map_key(&key(KeyCode::Char('y'), KeyModifiers::CONTROL)),
            Some(Action::CopyUrl)
        ));
        assert!(matches!(
            map_key(&key(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            Some(Action::Download)
        ));
        assert!(map_key(&key(KeyCode::Char('x'), KeyModifiers::ALT)).is_none());
    }

    #[test]
    fn navigation_keys_move_selection() {
        assert!(matches!(
            map_key(&key(KeyCode::PageDown, KeyModifiers::NONE)),
            Some(Action::MoveSelection(PAGE_STEP))
        ));
        assert!(matches!(
            map_event(&TerminalEvent::Resize(80, 24)),
            Some(Action::Resize(80, 24))
        ));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut release = key(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(map_key(&release).is_none());
    }
}
