//! The actors on the board.
//!
//! Every entity is a cell plus, at most, a status flag. Player and enemies move;
//! treasures and power-ups only sit there until the player steps on them.

pub mod collision;
pub mod enemy;
pub mod item;
pub mod player;

pub use collision::Positioned;
pub use enemy::Enemy;
pub use item::{PowerUp, Treasure};
pub use player::Player;
