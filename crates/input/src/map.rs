//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Only `a`/`A` and `d`/`D` are recognized during play; every other key is
/// ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Raw mode disables the terminal's own Ctrl-C handling, so the driver has
/// to recognize it here to guarantee the terminal gets restored.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
