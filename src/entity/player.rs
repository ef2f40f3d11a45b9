use crate::entity::Positioned;
use crate::map::{direction::Direction, grid::Cell};

/// The single player-controlled actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    cell: Cell,
}

impl Player {
    pub fn new(cell: Cell) -> Self {
        Self { cell }
    }

    /// Shifts the player one cell in `direction`.
    ///
    /// The caller has already checked the target against the grid bounds; a step
    /// that would go below zero leaves the player where it is.
    pub fn shift(&mut self, direction: Direction) {
        debug_assert!(self.cell.offset(direction).is_some(), "unchecked move off the grid");
        if let Some(next) = self.cell.offset(direction) {
            self.cell = next;
        }
    }
}

impl Positioned for Player {
    fn cell(&self) -> Cell {
        self.cell
    }
}
