use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use log::{info, warn};
use serde::Deserialize;

/// Optional overrides looked up in the working directory
pub const CONFIG_PATH: &str = "snake_config.json";

/// Configuration for the game
///
/// The board is fixed at 20x20 cells of 20px to match the window; only the
/// timing knobs are read from the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    #[serde(skip)]
    pub grid_width: i32,
    /// Height of the game grid in cells
    #[serde(skip)]
    pub grid_height: i32,
    /// Pixels per grid cell
    #[serde(skip)]
    pub cell_size: f32,
    /// Tick interval at score 0
    pub base_interval_ms: u32,
    /// Fastest tick interval
    pub min_interval_ms: u32,
    /// Interval reduction per point scored
    pub speedup_per_point_ms: u32,
    /// Snake length at the start of a session
    pub initial_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            cell_size: 20.0,
            base_interval_ms: 150,
            min_interval_ms: 60,
            speedup_per_point_ms: 2,
            initial_length: 3,
        }
    }
}

impl GameConfig {
    /// Canvas size in pixels
    pub fn board_size(&self) -> (f32, f32) {
        (
            self.grid_width as f32 * self.cell_size,
            self.grid_height as f32 * self.cell_size,
        )
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_width > 0 && self.grid_height > 0, "grid must not be empty");
        ensure!(self.min_interval_ms > 0, "min_interval_ms must be positive");
        ensure!(
            self.base_interval_ms >= self.min_interval_ms,
            "base_interval_ms ({}) is below min_interval_ms ({})",
            self.base_interval_ms,
            self.min_interval_ms
        );
        ensure!(self.cell_size >= 4.0, "cell_size must be at least 4 pixels");
        ensure!(self.initial_length >= 1, "initial_length must be at least 1");
        // Snake starts at the centre and extends left
        ensure!(
            self.initial_length as i32 <= self.grid_width / 2 + 1,
            "initial_length {} does not fit left of the centre",
            self.initial_length
        );
        Ok(())
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("malformed config")?;
        config.validate().context("invalid config")?;
        Ok(config)
    }

    /// Reads `path` if it exists. A missing file is not an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text).map(Some)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(Some(config)) => {
                info!("loaded config from {}", path.as_ref().display());
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                warn!("ignoring config: {err:#}");
                Self::default()
            }
        }
    }
}
