//! Startup configuration.
//!
//! Values come from the compiled-in defaults in [`crate::constants`], optionally
//! overridden by `CRAWLER_*` environment variables. The configuration is read once
//! at startup and never changes while the game runs.

use std::time::Duration;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::constants::{
    ENEMY_COUNT, ENEMY_MOVE_THRESHOLD, ENV_PREFIX, FREEZE_DURATION_TICKS, GRID_SIZE, MAX_GRID_SIZE, POWER_UP_COUNT,
    TICK_RATE, TREASURE_COUNT,
};
use crate::error::ConfigError;
use crate::map::grid::Grid;

/// Process-wide game parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the board, in cells
    pub grid_size: u32,
    pub enemy_count: usize,
    pub treasure_count: usize,
    pub power_up_count: usize,
    /// Enemies move once every this many ticks
    pub enemy_move_threshold: u32,
    /// Ticks a power-up keeps enemies frozen
    pub freeze_duration_ticks: u32,
    /// Game ticks per second
    pub tick_rate: u32,
    /// Seed for entity placement; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            enemy_count: ENEMY_COUNT,
            treasure_count: TREASURE_COUNT,
            power_up_count: POWER_UP_COUNT,
            enemy_move_threshold: ENEMY_MOVE_THRESHOLD,
            freeze_duration_ticks: FREEZE_DURATION_TICKS,
            tick_rate: TICK_RATE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads the defaults with environment overrides applied, then validates.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// The layered configuration sources, lowest priority first.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(GameConfig::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: GameConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // The player starts on the origin and enemies never spawn there, so at
        // least one other cell must exist.
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                size: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.enemy_move_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    /// Wall-clock length of one tick.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size)
    }
}
