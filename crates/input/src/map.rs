//! Key mapping from terminal events to paddle keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key code to a paddle key.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::P1Up),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::P1Down),
        KeyCode::Up => Some(Key::P2Up),
        KeyCode::Down => Some(Key::P2Down),
        _ => None,
    }
}

/// Check if key should end the process.
///
/// Raw mode turns Ctrl-C into an ordinary key event, so it is handled here.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
