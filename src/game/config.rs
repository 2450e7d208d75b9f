use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::{error::GameError, fruit::SpawnRegion};

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,
    /// Seconds between two game ticks
    pub tick_interval_secs: f64,
    /// Cells fruit and the starting head may be placed on
    pub fruit_region: SpawnRegion,
    /// Fixed RNG seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 20,
            tick_interval_secs: 0.08,
            fruit_region: SpawnRegion::Full,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small seeded grid for testing
    pub fn small() -> Self {
        Self {
            seed: Some(0),
            ..Self::new(10, 10)
        }
    }

    pub fn with_tick_interval(mut self, secs: f64) -> Self {
        self.tick_interval_secs = secs;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(self.tick_interval_secs)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(GameError::InvalidDimensions {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        // also rejects NaN
        if !(self.tick_interval_secs.is_finite() && self.tick_interval_secs > 0.0) {
            return Err(GameError::InvalidTickInterval(self.tick_interval_secs));
        }

        self.fruit_region.check(self.grid_width, self.grid_height)
    }

    /// Load and validate a JSON configuration file. Missing fields fall
    /// back to their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {:?}", path))?;
        Ok(config)
    }
}
