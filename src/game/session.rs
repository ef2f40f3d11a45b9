//! The complete mutable state of one round.
//!
//! A session is never patched back into a fresh state: restarting the game throws
//! the old session away and builds a new one.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::entity::{collision::remove_at, Enemy, Player, Positioned, PowerUp, Treasure};
use crate::error::MoveError;
use crate::game::Outcome;
use crate::map::{
    direction::Direction,
    grid::{Cell, Grid},
};

/// What the collision pass found on a single tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollisionReport {
    /// An unfrozen enemy shared the player's cell
    pub caught: bool,
    pub treasures: usize,
    pub power_ups: usize,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    player: Player,
    enemies: Vec<Enemy>,
    treasures: Vec<Treasure>,
    power_ups: Vec<PowerUp>,
    treasures_collected: usize,
    freeze_timer: u32,
    enemy_move_counter: u32,
    outcome: Option<Outcome>,
    started_at: Instant,
    elapsed: Option<Duration>,
}

impl GameSession {
    /// Builds a session with the player on the origin and everything else placed at random.
    ///
    /// Items may overlap each other or the origin. Enemies never start on the origin.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let grid = config.grid();
        let origin = Cell::ORIGIN;

        let enemies: Vec<Cell> = (0..config.enemy_count)
            .map(|_| random_cell_except(&grid, origin, rng))
            .collect();
        let treasures: Vec<Cell> = (0..config.treasure_count).map(|_| grid.random_cell(rng)).collect();
        let power_ups: Vec<Cell> = (0..config.power_up_count).map(|_| grid.random_cell(rng)).collect();

        let session = Self::from_layout(origin, enemies, treasures, power_ups);
        debug!(
            seed = ?config.seed,
            grid = grid.size(),
            enemies = session.enemies.len(),
            treasures = session.treasures.len(),
            power_ups = session.power_ups.len(),
            "New session laid out"
        );
        session
    }

    /// Builds a session from explicit positions. Enemy order is kept as given.
    pub fn from_layout(
        player: Cell,
        enemies: impl IntoIterator<Item = Cell>,
        treasures: impl IntoIterator<Item = Cell>,
        power_ups: impl IntoIterator<Item = Cell>,
    ) -> Self {
        Self {
            player: Player::new(player),
            enemies: enemies.into_iter().map(Enemy::new).collect(),
            treasures: treasures.into_iter().map(Treasure::new).collect(),
            power_ups: power_ups.into_iter().map(PowerUp::new).collect(),
            treasures_collected: 0,
            freeze_timer: 0,
            enemy_move_counter: 0,
            outcome: None,
            started_at: Instant::now(),
            elapsed: None,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    pub fn treasures_collected(&self) -> usize {
        self.treasures_collected
    }

    /// Ticks left before frozen enemies thaw; zero when nothing is frozen.
    pub fn freeze_timer(&self) -> u32 {
        self.freeze_timer
    }

    pub fn enemy_move_counter(&self) -> u32 {
        self.enemy_move_counter
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Time spent in this session; fixed once the session has ended.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.unwrap_or_else(|| self.started_at.elapsed())
    }

    /// The play time recorded when the session ended, if it has.
    pub fn final_duration(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Restarts the play clock, e.g. when the intro screen is dismissed.
    pub fn restart_clock(&mut self) {
        if !self.is_over() {
            self.started_at = Instant::now();
        }
    }

    /// Counts down the freeze timer, thawing every enemy at once when it hits zero.
    ///
    /// Returns true on the tick the enemies thaw.
    pub(crate) fn tick_freeze(&mut self) -> bool {
        if self.freeze_timer == 0 {
            return false;
        }
        self.freeze_timer -= 1;
        if self.freeze_timer > 0 {
            return false;
        }
        for enemy in &mut self.enemies {
            enemy.set_frozen(false);
        }
        true
    }

    /// Freezes every enemy for `duration` ticks, restarting any freeze in progress.
    pub(crate) fn freeze_enemies(&mut self, duration: u32) {
        if duration == 0 {
            return;
        }
        self.freeze_timer = duration;
        for enemy in &mut self.enemies {
            enemy.set_frozen(true);
        }
    }

    /// Moves the player one cell, provided the target is on the board.
    pub(crate) fn move_player(&mut self, direction: Direction, grid: &Grid) -> Result<Cell, MoveError> {
        if self.is_over() {
            return Err(MoveError::NotPlaying);
        }
        let from = self.player.cell();
        if grid.step(from, direction).is_none() {
            return Err(MoveError::OutOfBounds { from, direction });
        }
        self.player.shift(direction);
        Ok(self.player.cell())
    }

    /// Advances the enemy-move counter; returns true (and resets it) when enemies should move.
    pub(crate) fn count_enemy_tick(&mut self, threshold: u32) -> bool {
        self.enemy_move_counter += 1;
        if self.enemy_move_counter >= threshold {
            self.enemy_move_counter = 0;
            return true;
        }
        false
    }

    pub(crate) fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    /// Player versus enemies, then treasures, then power-ups.
    ///
    /// Being caught ends the session, but the remaining pickups on that cell are
    /// still resolved.
    pub(crate) fn resolve_collisions(&mut self, freeze_duration: u32) -> CollisionReport {
        let cell = self.player.cell();
        let mut report = CollisionReport::default();

        if self
            .enemies
            .iter()
            .any(|enemy| !enemy.is_frozen() && enemy.is_colliding_with(&self.player))
        {
            report.caught = true;
            self.end(Outcome::Lost);
        }

        report.treasures = remove_at(&mut self.treasures, cell);
        self.treasures_collected += report.treasures;

        report.power_ups = remove_at(&mut self.power_ups, cell);
        if report.power_ups > 0 {
            self.freeze_enemies(freeze_duration);
        }

        report
    }

    /// Ends the session as a win if every treasure has been collected.
    pub(crate) fn check_win(&mut self) -> bool {
        if self.is_over() || !self.treasures.is_empty() {
            return false;
        }
        self.end(Outcome::Won);
        true
    }

    /// Marks the session as finished and fixes its duration. Only the first call counts.
    pub(crate) fn end(&mut self, outcome: Outcome) {
        if self.is_over() {
            return;
        }
        let elapsed = self.started_at.elapsed();
        self.outcome = Some(outcome);
        self.elapsed = Some(elapsed);
        info!(
            %outcome,
            treasures = self.treasures_collected,
            elapsed = format!("{:.2}s", elapsed.as_secs_f32()),
            "Session ended"
        );
    }
}

fn random_cell_except<R: Rng + ?Sized>(grid: &Grid, excluded: Cell, rng: &mut R) -> Cell {
    loop {
        let cell = grid.random_cell(rng);
        if cell != excluded || grid.cell_count() <= 1 {
            return cell;
        }
    }
}
