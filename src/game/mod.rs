//! The tick-driven game state machine.
//!
//! `Intro` waits for any key, `Playing` runs the per-tick rules, and `GameOver`
//! waits for a restart (which builds a brand-new session) or a quit.

use std::ops::ControlFlow;

use circular_buffer::CircularBuffer;
use rand::rngs::SmallRng;
use rand::Rng;
use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::constants::{INTRO_LINES, MAX_PENDING_MOVES};
use crate::entity::Positioned;
use crate::error::MoveError;
use crate::formatter;
use crate::map::{
    direction::Direction,
    grid::{Cell, Grid},
};
use crate::platform;
use crate::systems::PursuitController;

use self::events::GameCommand;
use self::session::GameSession;
use self::snapshot::{EnemyView, Snapshot, Stats};

pub mod events;
pub mod session;
pub mod snapshot;

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// The banner shown once the session is over.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Won => "You Win! Press R to Restart or Q to Quit",
            Outcome::Lost => "Game Over! Press R to Restart or Q to Quit",
        }
    }
}

/// The high-level stage of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStage {
    /// Instructions are showing; the first key press starts play.
    Intro,
    Playing,
    GameOver(Outcome),
}

/// Owns the current session and applies input and ticks to it.
pub struct Game<R: Rng = SmallRng> {
    config: GameConfig,
    grid: Grid,
    stage: GameStage,
    session: GameSession,
    pursuit: PursuitController,
    pending_moves: CircularBuffer<MAX_PENDING_MOVES, Direction>,
    rng: R,
    ticks: u64,
}

impl Game<SmallRng> {
    /// Creates a game on the intro screen, seeded from the config or the OS.
    pub fn new(config: GameConfig) -> Self {
        let rng = platform::rng(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let session = GameSession::new(&config, &mut rng);
        Self {
            grid: config.grid(),
            config,
            stage: GameStage::Intro,
            session,
            pursuit: PursuitController::default(),
            pending_moves: CircularBuffer::new(),
            rng,
            ticks: 0,
        }
    }

    /// Starts directly in play with a prepared session, skipping the intro.
    pub fn with_session(config: GameConfig, session: GameSession, rng: R) -> Self {
        let stage = match session.outcome() {
            Some(outcome) => GameStage::GameOver(outcome),
            None => GameStage::Playing,
        };
        Self {
            grid: config.grid(),
            config,
            stage,
            session,
            pursuit: PursuitController::default(),
            pending_moves: CircularBuffer::new(),
            rng,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stage(&self) -> GameStage {
        self.stage
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Ticks processed since the game was created, in any stage.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Applies one input event. Returns `Break` when the game should shut down.
    pub fn handle_command(&mut self, command: GameCommand) -> ControlFlow<()> {
        if command == GameCommand::Quit {
            info!(stage = ?self.stage, "Quit requested");
            return ControlFlow::Break(());
        }

        match (self.stage, command) {
            (GameStage::Intro, _) => {
                debug!("Intro dismissed");
                self.session.restart_clock();
                self.stage = GameStage::Playing;
            }
            (GameStage::Playing, GameCommand::MovePlayer(direction)) => {
                if self.pending_moves.is_full() {
                    trace!(?direction, "Move queue full, dropping oldest request");
                }
                self.pending_moves.push_back(direction);
            }
            (GameStage::GameOver(_), GameCommand::Restart) => self.restart(),
            (stage, command) => trace!(?stage, ?command, "Ignoring command"),
        }

        ControlFlow::Continue(())
    }

    /// Throws the current session away and starts playing a fresh one.
    pub fn restart(&mut self) {
        self.session = GameSession::new(&self.config, &mut self.rng);
        self.pending_moves.clear();
        self.stage = GameStage::Playing;
        info!("Game restarted");
    }

    /// Advances the game clock by one tick.
    pub fn tick(&mut self) {
        self.ticks += 1;
        formatter::increment_tick();

        if self.stage != GameStage::Playing {
            return;
        }

        if self.session.tick_freeze() {
            debug!("Freeze expired, enemies resume pursuit");
        }

        if let Some(direction) = self.pending_moves.pop_front() {
            match self.session.move_player(direction, &self.grid) {
                Ok(cell) => trace!(?direction, %cell, "Player moved"),
                Err(error) => trace!(%error, "Move rejected"),
            }
        }

        if self.session.count_enemy_tick(self.config.enemy_move_threshold) {
            let target = self.session.player().cell();
            let moved = self.pursuit.advance_all(self.session.enemies_mut(), target, &self.grid);
            trace!(moved, %target, "Pursuit tick");
        }

        let report = self.session.resolve_collisions(self.config.freeze_duration_ticks);
        if report.caught {
            debug!(cell = %self.session.player().cell(), "Player caught by an enemy");
        }
        if report.treasures > 0 {
            debug!(
                collected = self.session.treasures_collected(),
                remaining = self.session.treasures().len(),
                "Treasure collected"
            );
        }
        if report.power_ups > 0 {
            debug!(duration = self.config.freeze_duration_ticks, "Power-up collected, enemies frozen");
        }

        self.session.check_win();

        if let Some(outcome) = self.session.outcome() {
            self.stage = GameStage::GameOver(outcome);
        }
    }

    /// Attempts a single player move right away, bypassing the input queue.
    pub fn try_move(&mut self, direction: Direction) -> Result<Cell, MoveError> {
        if self.stage != GameStage::Playing {
            return Err(MoveError::NotPlaying);
        }
        self.session.move_player(direction, &self.grid)
    }

    pub fn snapshot(&self) -> Snapshot {
        let session = &self.session;
        let finished = match self.stage {
            GameStage::GameOver(outcome) => Some(outcome),
            _ => None,
        };

        Snapshot {
            stage: self.stage,
            grid_size: self.grid.size(),
            player: session.player().cell(),
            enemies: session
                .enemies()
                .iter()
                .map(|enemy| EnemyView {
                    cell: enemy.cell(),
                    frozen: enemy.is_frozen(),
                })
                .collect(),
            treasures: session.treasures().iter().map(Positioned::cell).collect(),
            power_ups: session.power_ups().iter().map(Positioned::cell).collect(),
            intro: (self.stage == GameStage::Intro).then_some(INTRO_LINES),
            message: finished.map(|outcome| outcome.message()),
            stats: finished.map(|_| Stats {
                treasures_collected: session.treasures_collected(),
                elapsed: session.elapsed(),
            }),
        }
    }
}
