//! The read-only view of a tick handed to the presentation layer.

use std::fmt;
use std::time::Duration;

use crate::game::GameStage;
use crate::map::grid::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyView {
    pub cell: Cell,
    pub frozen: bool,
}

/// End-of-game statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub treasures_collected: usize,
    pub elapsed: Duration,
}

impl Stats {
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Treasures Collected: {}    Time: {:.2}s",
            self.treasures_collected,
            self.elapsed_secs()
        )
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub stage: GameStage,
    pub grid_size: u32,
    pub player: Cell,
    pub enemies: Vec<EnemyView>,
    pub treasures: Vec<Cell>,
    pub power_ups: Vec<Cell>,
    /// Instructions, shown only before the first round starts
    pub intro: Option<&'static [&'static str]>,
    /// Win or loss banner
    pub message: Option<&'static str>,
    pub stats: Option<Stats>,
}
