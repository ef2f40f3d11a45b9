//! Platform glue: logging setup, frame pacing and randomness.

mod desktop;
pub use desktop::*;
