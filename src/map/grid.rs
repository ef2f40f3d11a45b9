//! The static, bounded board that every entity lives on.

use std::fmt;

use glam::{IVec2, UVec2};
use rand::Rng;
use smallvec::SmallVec;

use crate::map::direction::Direction;

/// A single addressable board position.
///
/// Cells are plain values; whether one lies inside a particular [`Grid`] is
/// checked by the grid, never by the cell itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    /// The top-left corner, where the player always starts.
    pub const ORIGIN: Cell = Cell { col: 0, row: 0 };

    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    pub fn as_uvec2(self) -> UVec2 {
        UVec2::new(self.col, self.row)
    }

    pub fn as_ivec2(self) -> IVec2 {
        self.as_uvec2().as_ivec2()
    }

    /// Number of unit steps between two cells on a 4-connected board.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }

    /// The adjacent cell in `direction`, or `None` if that would go negative.
    ///
    /// Upper bounds are the grid's concern; see [`Grid::step`].
    pub fn offset(self, direction: Direction) -> Option<Cell> {
        let next = self.as_ivec2() + direction.as_ivec2();
        if next.x < 0 || next.y < 0 {
            return None;
        }
        Some(Cell::new(next.x as u32, next.y as u32))
    }
}

impl From<UVec2> for Cell {
    fn from(value: UVec2) -> Self {
        Cell::new(value.x, value.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Anything a path can be searched over.
///
/// Every step between a cell and one of its neighbors costs exactly one, which
/// keeps the Manhattan distance an admissible and consistent heuristic.
pub trait Navigable {
    /// Cells reachable in a single step from `cell`.
    fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]>;
}

/// A square board of `size` x `size` open cells.
///
/// The grid carries no occupancy data; entities track their own cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: u32,
}

impl Grid {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.size && cell.row < self.size
    }

    /// The neighbor of `cell` in `direction`, if it is still on the board.
    pub fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.offset(direction).filter(|next| self.contains(*next))
    }

    /// Every cell on the board, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Cell::new(col, row)))
    }

    /// A uniformly random cell on the board.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.random_range(0..self.size), rng.random_range(0..self.size))
    }
}

impl Navigable for Grid {
    fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        Direction::DIRECTIONS
            .iter()
            .filter_map(|direction| self.step(cell, *direction))
            .collect()
    }
}
