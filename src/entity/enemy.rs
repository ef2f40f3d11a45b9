use tracing::{debug, trace};

use crate::entity::Positioned;
use crate::map::{
    astar::PathFinder,
    grid::{Cell, Grid},
};

/// An AI-controlled pursuer.
///
/// While `frozen` the enemy neither moves nor counts as a threat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    cell: Cell,
    frozen: bool,
}

impl Enemy {
    pub fn new(cell: Cell) -> Self {
        Self { cell, frozen: false }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    /// Takes at most one step along a shortest path toward `target`.
    ///
    /// Returns whether the enemy moved. A frozen enemy, an enemy already on the
    /// target, and an unreachable target all leave it in place.
    pub fn pursue<P: PathFinder>(&mut self, target: Cell, grid: &Grid, pathfinder: &P) -> bool {
        if self.frozen {
            return false;
        }

        let Some(path) = pathfinder.find_path(self.cell, target, grid) else {
            debug!(from = %self.cell, %target, "Enemy has no path to target");
            return false;
        };

        match path.get(1) {
            Some(next) => {
                trace!(from = %self.cell, to = %next, remaining = path.len() - 2, "Enemy advancing");
                self.cell = *next;
                true
            }
            None => false,
        }
    }
}

impl Positioned for Enemy {
    fn cell(&self) -> Cell {
        self.cell
    }
}
