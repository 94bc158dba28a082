//! Mapping from terminal events to garden inputs.

use crate::types::{Direction, GardenInput};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map any terminal event to a garden input.
///
/// Only key presses count; repeats and releases are ignored.
pub fn handle_event(event: &Event) -> Option<GardenInput> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        Event::Mouse(mouse) => handle_mouse_event(*mouse),
        Event::FocusLost => Some(GardenInput::Pause),
        Event::Resize(width, height) => Some(GardenInput::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Map keyboard input to garden inputs.
pub fn handle_key_event(key: KeyEvent) -> Option<GardenInput> {
    match key.code {
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GardenInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GardenInput::Direction(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GardenInput::Direction(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GardenInput::Direction(Direction::Right))
        }

        KeyCode::Char('p') | KeyCode::Char('P') => Some(GardenInput::Pause),

        _ => None,
    }
}

/// Map a mouse event to a tap. Only left-button presses tap.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<GardenInput> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(GardenInput::Tap {
            x: i32::from(mouse.column),
            y: i32::from(mouse.row),
        }),
        _ => None,
    }
}

/// Check if key should quit the garden.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
