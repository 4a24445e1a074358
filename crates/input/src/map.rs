//! Key mapping from terminal events to physical buttons.
//!
//! The returned buttons are *physical*: the panel applies the orientation
//! remap before they reach the game.

use crate::types::Button;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key means to the emulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Button(Button),
    Quit,
}

/// Map a key event to a physical button or the quit signal.
pub fn map_key(key: KeyEvent) -> Option<KeyInput> {
    if should_quit(key) {
        return Some(KeyInput::Quit);
    }
    let button = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Button::Up,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Button::Left,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Button::Down,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Button::Right,
        KeyCode::Enter | KeyCode::Char(' ') => Button::Enter,
        KeyCode::Backspace => Button::Back,
        _ => return None,
    };
    Some(KeyInput::Button(button))
}

/// Check if key should quit the emulator.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
