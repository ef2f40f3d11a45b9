//! Static pickups. They never move and disappear the tick the player reaches them.

use crate::entity::Positioned;
use crate::map::grid::Cell;

/// A collectible; the session is won once none remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Treasure {
    cell: Cell,
}

impl Treasure {
    pub fn new(cell: Cell) -> Self {
        Self { cell }
    }
}

impl Positioned for Treasure {
    fn cell(&self) -> Cell {
        self.cell
    }
}

/// Freezes every enemy when picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUp {
    cell: Cell,
}

impl PowerUp {
    pub fn new(cell: Cell) -> Self {
        Self { cell }
    }
}

impl Positioned for PowerUp {
    fn cell(&self) -> Cell {
        self.cell
    }
}
