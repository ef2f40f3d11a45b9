//! The board: cells, adjacency, and shortest-path search over it.

pub mod astar;
pub mod direction;
pub mod grid;
