//! Grid pursuit game library crate.
//!
//! A player collects treasures on a square board while enemies chase it with A*.
//! Everything is tick-driven and single-threaded; drawing and input live behind
//! the traits in [`app`].

pub mod app;
pub mod autopilot;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod game;
pub mod map;
pub mod platform;
pub mod profiling;
pub mod render;
pub mod systems;
