use macroquad::color::Color;
use macroquad::math::{Vec2, vec2};
use macroquad::shapes::{draw_circle, draw_line, draw_rectangle};
use macroquad::text::{draw_text, measure_text};

use super::Surface;

/// Draws straight to the macroquad window, shifted by a fixed origin
#[derive(Debug, Clone, Copy)]
pub struct MacroquadSurface {
    origin: Vec2,
}

impl MacroquadSurface {
    pub fn at(x: f32, y: f32) -> Self {
        Self { origin: vec2(x, y) }
    }

    /// Converts a window position into this surface's coordinates
    pub fn to_local(&self, screen: (f32, f32)) -> Vec2 {
        vec2(screen.0, screen.1) - self.origin
    }
}

impl Surface for MacroquadSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(self.origin.x + x, self.origin.y + y, w, h, color);
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Color) {
        let o = self.origin;
        draw_line(o.x + x1, o.y + y1, o.x + x2, o.y + y2, thickness, color);
    }

    // macroquad has no rounded rectangle: a cross of two rects plus four corner discs
    fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Color) {
        let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
        let (x, y) = (self.origin.x + x, self.origin.y + y);

        draw_rectangle(x + r, y, w - 2.0 * r, h, color);
        draw_rectangle(x, y + r, r, h - 2.0 * r, color);
        draw_rectangle(x + w - r, y + r, r, h - 2.0 * r, color);

        draw_circle(x + r, y + r, r, color);
        draw_circle(x + w - r, y + r, r, color);
        draw_circle(x + r, y + h - r, r, color);
        draw_circle(x + w - r, y + h - r, r, color);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        draw_circle(self.origin.x + x, self.origin.y + y, radius, color);
    }

    fn text_centered(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        let m = measure_text(text, None, font_size as u16, 1.0);
        // draw_text takes the baseline, so drop by half the glyph height
        draw_text(
            text,
            self.origin.x + x - m.width * 0.5,
            self.origin.y + y + m.offset_y * 0.5,
            font_size,
            color,
        );
    }
}
