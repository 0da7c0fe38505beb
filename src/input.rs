//! Keyboard mapping for the terminal front end.

use crate::session::SessionInput;
use crate::snake::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a session input.
///
/// WASD and the arrow keys steer; Esc, `q` and Ctrl+C quit; every other key
/// is [`SessionInput::Other`], which starts a game from the prompt.
pub fn map_key(key: KeyEvent) -> SessionInput {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return SessionInput::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            SessionInput::Turn(Direction::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            SessionInput::Turn(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            SessionInput::Turn(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            SessionInput::Turn(Direction::Right)
        }
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => SessionInput::Quit,
        _ => SessionInput::Other,
    }
}
