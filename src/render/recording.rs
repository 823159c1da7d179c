use macroquad::color::Color;

use super::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Rounded { x: f32, y: f32, w: f32, h: f32, radius: f32, color: Color },
    Circle { x: f32, y: f32, radius: f32, color: Color },
    Text { text: String, x: f32, y: f32, size: f32 },
}

impl DrawCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCommand::Rect { .. } => "rect",
            DrawCommand::Line { .. } => "line",
            DrawCommand::Rounded { .. } => "rounded",
            DrawCommand::Circle { .. } => "circle",
            DrawCommand::Text { .. } => "text",
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Surface that keeps every call for inspection
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter().filter_map(DrawCommand::text).collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, _thickness: f32, _color: Color) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2 });
    }

    fn fill_rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Rounded { x, y, w, h, radius, color });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { x, y, radius, color });
    }

    fn text_centered(&mut self, text: &str, x: f32, y: f32, font_size: f32, _color: Color) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), x, y, size: font_size });
    }
}
