//! Drawing the game
//!
//! Everything here draws through [`Surface`], a handful of pixel-space
//! primitives. The macroquad implementation lives in `macroquad_surface`;
//! tests record the calls instead.

pub mod hud;
pub mod macroquad_surface;
pub mod renderer;

#[cfg(test)]
pub(crate) mod recording;

use macroquad::color::Color;

pub use hud::{HUD_HEIGHT, Hud, Overlay};
pub use macroquad_surface::MacroquadSurface;
pub use renderer::Renderer;

/// Pixel-space draw primitives
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Color);

    fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Color);

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);

    /// Text centred on (x, y)
    fn text_centered(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
}
