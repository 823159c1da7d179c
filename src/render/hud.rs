use macroquad::color::{Color, WHITE};
use macroquad::math::{Rect, Vec2};

use super::Surface;
use crate::game::Ending;

/// Height of the score strip above the board
pub const HUD_HEIGHT: f32 = 40.0;

const HUD_BACKGROUND: Color = Color::new(0.086, 0.129, 0.243, 1.0);
const HUD_LABEL: Color = Color::new(0.290, 0.871, 0.502, 1.0);
const HUD_FONT_SIZE: f32 = 22.0;

const OVERLAY_VEIL: Color = Color::new(0.0, 0.0, 0.0, 0.6);
const BUTTON: Color = Color::new(0.133, 0.773, 0.369, 1.0);
const BUTTON_SIZE: (f32, f32) = (140.0, 40.0);

/// Current and best score, re-rendered to text only when they change
#[derive(Debug, Clone)]
pub struct Hud {
    score: u32,
    best: u32,
    score_text: String,
    best_text: String,
}

impl Hud {
    pub fn new() -> Self {
        Self {
            score: 0,
            best: 0,
            score_text: "Score: 0".to_string(),
            best_text: "Best: 0".to_string(),
        }
    }

    /// Returns true when the displayed value changed
    pub fn set_score(&mut self, score: u32) -> bool {
        if score == self.score {
            return false;
        }
        self.score = score;
        self.score_text = format!("Score: {score}");
        true
    }

    pub fn set_best(&mut self, best: u32) -> bool {
        if best == self.best {
            return false;
        }
        self.best = best;
        self.best_text = format!("Best: {best}");
        true
    }

    pub fn score_text(&self) -> &str {
        &self.score_text
    }

    pub fn best_text(&self) -> &str {
        &self.best_text
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, width: f32) {
        surface.fill_rect(0.0, 0.0, width, HUD_HEIGHT, HUD_BACKGROUND);
        let y = HUD_HEIGHT / 2.0;
        surface.text_centered(&self.score_text, width * 0.25, y, HUD_FONT_SIZE, HUD_LABEL);
        surface.text_centered(&self.best_text, width * 0.75, y, HUD_FONT_SIZE, HUD_LABEL);
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

/// Modal panel shown while no session is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Before the first game
    Title,
    GameOver { score: u32, ending: Ending },
}

impl Overlay {
    pub fn title(&self) -> &'static str {
        match self {
            Overlay::Title => "Snake",
            Overlay::GameOver { ending, .. } if ending.is_win() => "You Win!",
            Overlay::GameOver { .. } => "Game Over",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Overlay::Title => "Arrows/WASD to move, P to pause".to_string(),
            Overlay::GameOver { score, .. } => format!("Your score: {score}"),
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            Overlay::Title => "Start",
            Overlay::GameOver { .. } => "Play Again",
        }
    }

    /// Start button, in board coordinates
    pub fn button_rect(width: f32, height: f32) -> Rect {
        let (w, h) = BUTTON_SIZE;
        Rect::new((width - w) * 0.5, height * 0.5 + 30.0, w, h)
    }

    pub fn button_hit(width: f32, height: f32, point: Vec2) -> bool {
        Self::button_rect(width, height).contains(point)
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, width: f32, height: f32) {
        surface.fill_rect(0.0, 0.0, width, height, OVERLAY_VEIL);
        surface.text_centered(self.title(), width * 0.5, height * 0.5 - 50.0, 36.0, WHITE);
        surface.text_centered(&self.message(), width * 0.5, height * 0.5 - 10.0, 20.0, WHITE);

        let button = Self::button_rect(width, height);
        surface.fill_rounded_rect(button.x, button.y, button.w, button.h, 6.0, BUTTON);
        surface.text_centered(
            self.button_label(),
            button.x + button.w * 0.5,
            button.y + button.h * 0.5,
            20.0,
            WHITE,
        );
    }
}
