//! Centralized error types for the game.
//!
//! Gameplay itself has almost no failure modes: an illegal move or an unreachable
//! goal degrades to a no-op. The types here cover startup (configuration, logging)
//! and the few internal checks whose outcome is logged and then discarded.

use std::io;

use crate::map::{direction::Direction, grid::Cell};

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while loading or validating the startup configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Grid size must be at least 2, got {0}")]
    GridTooSmall(u32),

    #[error("Grid size must be at most {max}, got {size}")]
    GridTooLarge { size: u32, max: u32 },

    #[error("Enemy move threshold must be at least 1 tick")]
    ZeroThreshold,

    #[error("Tick rate must be at least 1 tick per second")]
    ZeroTickRate,
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Load(Box::new(error))
    }
}

/// Reasons a requested player move was rejected.
///
/// These never reach the user; the state machine logs them and carries on.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Move {direction:?} from {from} would leave the grid")]
    OutOfBounds { from: Cell, direction: Direction },

    #[error("Moves are only accepted while playing")]
    NotPlaying,
}

/// Platform-specific errors.
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
