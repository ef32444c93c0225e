use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::components::Dir;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Move(Dir),
    Quit,
}

/// Translates a key press. Releases are ignored: a direction stays set until
/// another one replaces it.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(InputEvent::Move(Dir::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(InputEvent::Move(Dir::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(InputEvent::Move(Dir::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(InputEvent::Move(Dir::Right)),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Drains every event already queued by the terminal without blocking.
pub fn drain() -> io::Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            events.extend(map_key(key));
        }
    }
    Ok(events)
}

/// Blocks until `timeout` passes or a quit key arrives, whichever is first.
pub fn hold_until_quit(timeout: Duration) -> io::Result<()> {
    let deadline = Instant::now() + timeout;
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() {
            return Ok(());
        }
        if event::poll(left.min(Duration::from_millis(50)))? {
            if let Event::Key(key) = event::read()? {
                if map_key(key) == Some(InputEvent::Quit) {
                    return Ok(());
                }
            }
        }
    }
}
