use crate::config::GameConfig;

/// Linear speed-up of the tick interval, clamped to a floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedCurve {
    base_ms: u32,
    min_ms: u32,
    per_point_ms: u32,
}

impl SpeedCurve {
    pub fn new(base_ms: u32, min_ms: u32, per_point_ms: u32) -> Self {
        Self { base_ms, min_ms, per_point_ms }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.base_interval_ms, config.min_interval_ms, config.speedup_per_point_ms)
    }

    /// Milliseconds until the next tick at `score`: max(min, base - score * step)
    pub fn interval_ms(&self, score: u32) -> u32 {
        self.base_ms
            .saturating_sub(score.saturating_mul(self.per_point_ms))
            .max(self.min_ms)
    }
}

impl Default for SpeedCurve {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
