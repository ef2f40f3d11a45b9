//! Enemy pursuit.
//!
//! Every enemy searches for the player on its own. There is no shared path cache
//! and no avoidance between enemies, so several of them may end up on one cell.

use tracing::trace;

use crate::entity::{Enemy, Positioned};
use crate::map::{
    astar::{AStar, PathFinder},
    grid::{Cell, Grid},
};

/// Advances every enemy one step toward the player on pursuit ticks.
#[derive(Debug, Default, Clone)]
pub struct PursuitController<P = AStar> {
    pathfinder: P,
}

impl<P: PathFinder> PursuitController<P> {
    pub fn new(pathfinder: P) -> Self {
        Self { pathfinder }
    }

    /// Runs `pursue` on each enemy with the player's cell as the target.
    ///
    /// Returns the number of enemies that actually moved.
    pub fn advance_all(&self, enemies: &mut [Enemy], player_cell: Cell, grid: &Grid) -> usize {
        let mut moved = 0;
        for (index, enemy) in enemies.iter_mut().enumerate() {
            if enemy.pursue(player_cell, grid, &self.pathfinder) {
                moved += 1;
            } else {
                trace!(enemy = index, cell = %enemy.cell(), frozen = enemy.is_frozen(), "Enemy held position");
            }
        }
        moved
    }
}
