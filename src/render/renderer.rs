use macroquad::color::{Color, WHITE};

use super::Surface;
use crate::game::GameSession;

// Board palette
const BACKGROUND: Color = Color::new(0.059, 0.204, 0.376, 1.0); // deep navy
const GRID_LINE: Color = Color::new(1.0, 1.0, 1.0, 0.04); // barely there
const SNAKE_HEAD: Color = Color::new(0.133, 0.773, 0.369, 1.0); // bright green
const SNAKE_BODY: Color = Color::new(0.290, 0.871, 0.502, 1.0); // light green
const FOOD: Color = Color::new(0.973, 0.443, 0.443, 1.0); // soft red
const PAUSE_VEIL: Color = Color::new(0.0, 0.0, 0.0, 0.45);

const GRID_LINE_WIDTH: f32 = 0.5;
const PAUSED_FONT_SIZE: f32 = 28.0;

/// Draws a session onto a surface. Holds no state between frames.
pub struct Renderer {
    cell_size: f32,
}

impl Renderer {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Background, grid, snake, food, then the pause veil on top
    pub fn draw<S: Surface + ?Sized>(&self, session: &GameSession, surface: &mut S) {
        self.draw_board(session.width(), session.height(), surface);

        let cell = self.cell_size;
        for (i, segment) in session.snake().iter().enumerate() {
            let is_head = i == 0;
            let (padding, radius, color) = if is_head {
                (1.0, 4.0, SNAKE_HEAD)
            } else {
                (2.0, 3.0, SNAKE_BODY)
            };
            let (x, y) = segment.origin(cell);
            surface.fill_rounded_rect(
                x + padding,
                y + padding,
                cell - padding * 2.0,
                cell - padding * 2.0,
                radius,
                color,
            );
        }

        if let Some(food) = session.food() {
            let (x, y) = food.origin(cell);
            surface.fill_circle(x + cell / 2.0, y + cell / 2.0, cell / 2.0 - 3.0, FOOD);
        }

        if session.is_paused() {
            let (w, h) = self.board_size(session.width(), session.height());
            surface.fill_rect(0.0, 0.0, w, h, PAUSE_VEIL);
            surface.text_centered("PAUSED", w / 2.0, h / 2.0, PAUSED_FONT_SIZE, WHITE);
        }
    }

    /// Empty board: background and grid lines only
    pub fn draw_board<S: Surface + ?Sized>(&self, columns: i32, rows: i32, surface: &mut S) {
        let (w, h) = self.board_size(columns, rows);
        surface.fill_rect(0.0, 0.0, w, h, BACKGROUND);

        for c in 0..columns {
            let x = c as f32 * self.cell_size;
            surface.line(x, 0.0, x, h, GRID_LINE_WIDTH, GRID_LINE);
        }
        for r in 0..rows {
            let y = r as f32 * self.cell_size;
            surface.line(0.0, y, w, y, GRID_LINE_WIDTH, GRID_LINE);
        }
    }

    pub fn board_size(&self, columns: i32, rows: i32) -> (f32, f32) {
        (columns as f32 * self.cell_size, rows as f32 * self.cell_size)
    }
}
