//! A scripted player for the demo binary.
//!
//! It heads for the nearest treasure, detours to a power-up when an unfrozen enemy
//! gets close, and steers around cells next to unfrozen enemies when it can.

use std::collections::HashSet;

use pathfinding::prelude::bfs;
use smallvec::{smallvec, SmallVec};
use tracing::{debug, info};

use crate::app::InputSource;
use crate::constants::autopilot::DANGER_RADIUS;
use crate::game::{events::GameCommand, snapshot::Snapshot, GameStage};
use crate::map::{
    direction::Direction,
    grid::{Cell, Grid, Navigable},
};

pub struct Autopilot {
    rounds_left: u32,
}

impl Autopilot {
    /// Plays `rounds` sessions, restarting after each one, then quits.
    pub fn new(rounds: u32) -> Self {
        Self {
            rounds_left: rounds.max(1),
        }
    }

    pub fn rounds_left(&self) -> u32 {
        self.rounds_left
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, snapshot: &Snapshot) -> SmallVec<[GameCommand; 4]> {
        match snapshot.stage {
            GameStage::Intro => smallvec![GameCommand::AnyKey],
            GameStage::Playing => choose_move(snapshot).map(GameCommand::MovePlayer).into_iter().collect(),
            GameStage::GameOver(outcome) => {
                self.rounds_left = self.rounds_left.saturating_sub(1);
                if self.rounds_left == 0 {
                    info!(%outcome, "Autopilot finished its rounds");
                    smallvec![GameCommand::Quit]
                } else {
                    debug!(%outcome, rounds_left = self.rounds_left, "Autopilot restarting");
                    smallvec![GameCommand::Restart]
                }
            }
        }
    }
}

/// Picks the next step for the player in `snapshot`, if any target is reachable.
pub fn choose_move(snapshot: &Snapshot) -> Option<Direction> {
    let grid = Grid::new(snapshot.grid_size);
    let player = snapshot.player;

    let threats: Vec<Cell> = snapshot
        .enemies
        .iter()
        .filter(|enemy| !enemy.frozen)
        .map(|enemy| enemy.cell)
        .collect();

    let in_danger = threats.iter().any(|enemy| enemy.manhattan(player) <= DANGER_RADIUS);
    let targets: &[Cell] = if in_danger && !snapshot.power_ups.is_empty() {
        &snapshot.power_ups
    } else {
        &snapshot.treasures
    };
    if targets.is_empty() {
        return None;
    }

    let blocked: HashSet<Cell> = threats
        .iter()
        .flat_map(|enemy| grid.neighbors(*enemy).into_iter().chain(std::iter::once(*enemy)))
        .collect();

    let path = bfs(
        &player,
        |cell| {
            grid.neighbors(*cell)
                .into_iter()
                .filter(|next| !blocked.contains(next))
                .collect::<SmallVec<[Cell; 4]>>()
        },
        |cell| targets.contains(cell),
    )
    .or_else(|| bfs(&player, |cell| grid.neighbors(*cell), |cell| targets.contains(cell)))?;

    let next = path.get(1)?;
    Direction::from_delta(next.as_ivec2() - player.as_ivec2())
}
