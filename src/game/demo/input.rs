//! Keyboard input for the terminal frontend.
//!
//! WASD or arrows move, P drinks a potion, R restarts a finished game,
//! Q or Esc quits.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::types::{Direction, Intent};

/// Map one key press to an intent.
pub fn key_to_intent(key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Intent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Intent::Move(Direction::Up)),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Intent::Move(Direction::Down)),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Intent::Move(Direction::Left)),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Intent::Move(Direction::Right)),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Intent::UsePotion),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}

/// Drain every pending key press without blocking.
pub fn read_intents() -> io::Result<Vec<Intent>> {
    let mut intents = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            // Repeats and releases are not separate presses.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(intent) = key_to_intent(key) {
                intents.push(intent);
            }
        }
    }
    Ok(intents)
}
