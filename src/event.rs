//! Some code around handling events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events sent to the main thread.
#[derive(Debug)]
pub enum CoregraphEvent {
    Resize,
    KeyInput(KeyEvent),
    Terminate,
}

/// Handle a [`KeyEvent`], returning whether the program should exit.
pub fn handle_key_event_or_break(event: KeyEvent) -> bool {
    if event.modifiers.is_empty() {
        matches!(event.code, KeyCode::Char('q') | KeyCode::Esc)
    } else if let KeyModifiers::CONTROL = event.modifiers {
        event.code == KeyCode::Char('c')
    } else {
        false
    }
}
