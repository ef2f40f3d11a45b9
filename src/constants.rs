//! This module contains all the constants used in the game.

/// The width and height of the (square) board, in cells.
pub const GRID_SIZE: u32 = 20;

/// Largest accepted board size. Keeps cell arithmetic well inside `i32`.
pub const MAX_GRID_SIZE: u32 = 1024;

/// The number of enemies spawned into each session.
pub const ENEMY_COUNT: usize = 5;
/// The number of treasures that must be collected to win.
pub const TREASURE_COUNT: usize = 5;
/// The number of power-ups scattered across the board.
pub const POWER_UP_COUNT: usize = 3;

/// Enemies advance one cell every this many game ticks.
pub const ENEMY_MOVE_THRESHOLD: u32 = 3;
/// How long a power-up keeps every enemy frozen, in ticks.
pub const FREEZE_DURATION_TICKS: u32 = 100;

/// Base game clock rate, in ticks per second.
pub const TICK_RATE: u32 = 10;

/// Upper bound on move requests buffered between ticks. Extra requests are dropped.
pub const MAX_PENDING_MOVES: usize = 4;

/// Prefix for environment variables overriding the configuration.
pub const ENV_PREFIX: &str = "CRAWLER_";

/// Text shown while the game is waiting to be started.
pub const INTRO_LINES: &[&str] = &[
    "Welcome to AI Dungeon Crawler!",
    "",
    "Instructions:",
    "@ : You (Player)",
    "E : Enemies (Avoid them)",
    "$ : Treasures (Collect them)",
    "* : Power-ups (Freeze enemies)",
    "",
    "Use arrow keys to move.",
    "Collect all treasures to win.",
    "Avoid enemies or you'll lose.",
    "Collect power-ups to freeze enemies.",
    "",
    "Press any key to start the game.",
];

pub mod autopilot {
    /// An unfrozen enemy this close (in steps) makes the autopilot go for a power-up instead.
    pub const DANGER_RADIUS: u32 = 4;
    /// Rounds played by the demo binary before it quits.
    pub const DEFAULT_ROUNDS: u32 = 3;
}

pub mod profiling {
    /// Number of samples kept per timed phase.
    pub const TIMING_WINDOW_SIZE: usize = 30;
    /// The driver logs a timing summary every this many ticks.
    pub const SUMMARY_INTERVAL: u64 = 300;
}
