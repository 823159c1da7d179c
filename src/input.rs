use macroquad::input::{KeyCode, get_keys_pressed};

use crate::game::{Direction, GameSession};

/// A recognised key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Steer(Direction),
    TogglePause,
    /// Start or restart, only honoured while the overlay is up
    Start,
    Quit,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Maps a key to an event; unrecognised keys map to `None`
    pub fn handle_key(&self, key: KeyCode) -> Option<InputEvent> {
        let event = match key {
            KeyCode::Up | KeyCode::W => InputEvent::Steer(Direction::Up),
            KeyCode::Down | KeyCode::S => InputEvent::Steer(Direction::Down),
            KeyCode::Left | KeyCode::A => InputEvent::Steer(Direction::Left),
            KeyCode::Right | KeyCode::D => InputEvent::Steer(Direction::Right),

            KeyCode::P => InputEvent::TogglePause,
            KeyCode::Enter | KeyCode::KpEnter | KeyCode::Space => InputEvent::Start,
            KeyCode::Escape => InputEvent::Quit,

            _ => return None,
        };
        Some(event)
    }

    /// Keys pressed since the last frame. Needs a running macroquad context.
    pub fn poll(&self) -> Vec<InputEvent> {
        get_keys_pressed()
            .into_iter()
            .filter_map(|key| self.handle_key(key))
            .collect()
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Queues `direction` for the next tick unless it would reverse the snake.
///
/// The check is against the direction of the last tick, not the queued one,
/// so two quick turns cannot fold the head back onto the neck.
pub fn steer(session: &mut GameSession, direction: Direction) -> bool {
    if direction.is_opposite(session.direction()) {
        return false;
    }
    session.set_pending_direction(direction)
}
