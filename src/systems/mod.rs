//! Per-tick behaviors driven by the game state machine.

pub mod pursuit;

pub use pursuit::PursuitController;
