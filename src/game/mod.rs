//! Core game logic for Snake
//!
//! Nothing in here touches the window, the clock or the keyboard. A session is
//! advanced one tick at a time by whoever owns it.

pub mod direction;
pub mod session;
pub mod speed;

pub use direction::{Cell, Direction};
pub use session::{spawn_food, Ending, GameSession, Phase, TickOutcome};
pub use speed::SpeedCurve;
