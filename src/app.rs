//! The fixed-rate driver loop.
//!
//! Input and drawing are collaborators behind [`InputSource`] and [`Presenter`];
//! the app only moves events and snapshots between them and the [`Game`].

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, error, warn};

use crate::error::GameResult;
use crate::game::{events::GameCommand, snapshot::Snapshot, Game};
use crate::platform;
use crate::profiling::{Phase, TickTimings};

/// Supplies raw input events once per tick.
pub trait InputSource {
    /// Returns the events that arrived since the last poll. `snapshot` is the frame
    /// most recently presented.
    fn poll(&mut self, snapshot: &Snapshot) -> SmallVec<[GameCommand; 4]>;
}

/// Receives a snapshot once per tick.
pub trait Presenter {
    fn present(&mut self, snapshot: &Snapshot) -> GameResult<()>;
}

pub struct App<I, P, R: Rng> {
    game: Game<R>,
    input: I,
    presenter: P,
    timings: TickTimings,
    tick_interval: Duration,
    last_snapshot: Snapshot,
}

impl<I: InputSource, P: Presenter, R: Rng> App<I, P, R> {
    pub fn new(game: Game<R>, input: I, presenter: P) -> Self {
        let last_snapshot = game.snapshot();
        Self {
            tick_interval: game.config().tick_interval(),
            game,
            input,
            presenter,
            timings: TickTimings::default(),
            last_snapshot,
        }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    /// Runs a single tick. Returns false once a quit has been requested.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        if self.step().is_break() {
            return false;
        }

        if self.timings.finish_tick() {
            debug!(summary = self.timings.summary(), "Loop timings");
        }

        let elapsed = start.elapsed();
        if elapsed < self.tick_interval {
            platform::sleep(self.tick_interval - elapsed);
        } else {
            warn!("Game loop behind schedule by: {:?}", elapsed - self.tick_interval);
        }

        true
    }

    /// Input, update and presentation for one tick, without pacing.
    pub fn step(&mut self) -> ControlFlow<()> {
        let phase_start = Instant::now();
        for command in self.input.poll(&self.last_snapshot) {
            self.game.handle_command(command)?;
        }
        self.timings.record(Phase::Input, phase_start.elapsed());

        let phase_start = Instant::now();
        self.game.tick();
        self.last_snapshot = self.game.snapshot();
        self.timings.record(Phase::Update, phase_start.elapsed());

        let phase_start = Instant::now();
        if let Err(e) = self.presenter.present(&self.last_snapshot) {
            error!("Failed to present frame: {e}");
        }
        self.timings.record(Phase::Present, phase_start.elapsed());

        ControlFlow::Continue(())
    }
}
