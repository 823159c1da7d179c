//! Canvas Snake - grid snake game on a macroquad canvas
//!
//! This library provides:
//! - Core game logic without I/O (game module)
//! - A cancellable tick scheduler (scheduler module)
//! - Key bindings and steering rules (input module)
//! - Rendering against an abstract draw surface (render module)
//! - The session controller tying the pieces together (app module)
//! - Timing overrides read from JSON (config module)

pub mod app;
pub mod config;
pub mod game;
pub mod input;
pub mod render;
pub mod scheduler;
