//! Rolling timing statistics for the phases of the driver loop.

use std::time::Duration;

use circular_buffer::CircularBuffer;
use micromap::Map;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount, EnumIter, IntoStaticStr};
use thousands::Separable;

use crate::constants::profiling::{SUMMARY_INTERVAL, TIMING_WINDOW_SIZE};

/// The timed parts of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Input,
    Update,
    Present,
}

type Window = CircularBuffer<TIMING_WINDOW_SIZE, Duration>;

/// Keeps the last few samples of each [`Phase`].
pub struct TickTimings {
    windows: Map<Phase, Window, { Phase::COUNT }>,
    ticks: u64,
}

impl Default for TickTimings {
    fn default() -> Self {
        let mut windows = Map::new();
        for phase in Phase::iter() {
            windows.insert(phase, Window::new());
        }
        Self { windows, ticks: 0 }
    }
}

impl TickTimings {
    pub fn record(&mut self, phase: Phase, duration: Duration) {
        if let Some(window) = self.windows.get_mut(&phase) {
            window.push_back(duration);
        }
    }

    /// Mean of the retained samples, or `None` before the first sample.
    pub fn mean(&self, phase: Phase) -> Option<Duration> {
        let window = self.windows.get(&phase)?;
        if window.is_empty() {
            return None;
        }
        let total: Duration = window.iter().sum();
        Some(total / window.len() as u32)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Counts a completed loop iteration. Returns true when a summary is due.
    pub fn finish_tick(&mut self) -> bool {
        self.ticks += 1;
        self.ticks % SUMMARY_INTERVAL == 0
    }

    /// One line with the tick count and the mean of every phase that has samples.
    pub fn summary(&self) -> String {
        let mut line = format!("ticks={}", self.ticks.separate_with_commas());
        for phase in Phase::iter() {
            if let Some(mean) = self.mean(phase) {
                let name: &'static str = phase.into();
                line.push_str(&format!(" {}={:?}", name, mean));
            }
        }
        line
    }
}
