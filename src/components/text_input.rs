//! Single-buffer text editing shared by the comment box and the forms

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Apply an editing key to `buffer`. Returns true if the key was consumed.
pub fn apply_text_key(buffer: &mut String, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            buffer.clear();
            true
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            buffer.push(c);
            true
        }
        KeyCode::Backspace => {
            buffer.pop();
            true
        }
        _ => false,
    }
}
