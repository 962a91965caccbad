//! Configuration types for Game of Life runs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::InitialState;

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of generations computed after the initial one.
    pub generations: u64,
    /// Pause between frames in milliseconds.
    pub frame_interval_ms: u64,
    /// Side length of the fallback random grid.
    pub default_size: usize,
    /// RNG seed for random grids (None = thread-local RNG).
    #[serde(default)]
    pub seed: Option<u64>,
    /// Compute rows in parallel.
    #[serde(default)]
    pub parallel: bool,
    /// Terminal rendering options.
    #[serde(default)]
    pub render: RenderConfig,
    /// Initial state used when none is given on the command line.
    #[serde(default)]
    pub initial: Option<InitialState>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            frame_interval_ms: 50,
            default_size: 64,
            seed: None,
            parallel: false,
            render: RenderConfig::default(),
            initial: None,
        }
    }
}

/// How cells are drawn in the terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Glyph for a living cell.
    pub alive: char,
    /// Glyph for a dead cell.
    pub dead: char,
    /// Clear the screen before each frame.
    pub clear_screen: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alive: '█',
            dead: ' ',
            clear_screen: true,
        }
    }
}

impl SimulationConfig {
    /// Pause between frames.
    #[inline]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Random grid of `default_size` cells per side, seeded with `seed`.
    pub fn fallback_state(&self) -> InitialState {
        InitialState::Random {
            size: i64::try_from(self.default_size).unwrap_or(i64::MAX),
            seed: self.seed,
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_size == 0 || i64::try_from(self.default_size).is_err() {
            return Err(ConfigError::InvalidDefaultSize);
        }
        if self.render.alive == self.render.dead {
            return Err(ConfigError::InvalidRenderGlyphs);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Default grid size must be between 1 and {}", i64::MAX)]
    InvalidDefaultSize,
    #[error("Alive and dead glyphs must differ")]
    InvalidRenderGlyphs,
}
