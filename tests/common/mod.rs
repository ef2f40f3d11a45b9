#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use dungeon_crawler::{
    config::GameConfig,
    game::{events::GameCommand, session::GameSession, Game},
    map::{direction::Direction, grid::Cell},
};
use rand::{rngs::SmallRng, SeedableRng};
use tracing_subscriber::fmt::MakeWriter;

/// Keeps enemies parked for the length of any test.
pub const NEVER: u32 = 1_000_000;

pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

pub fn test_config(grid_size: u32, enemy_move_threshold: u32, freeze_duration_ticks: u32) -> GameConfig {
    GameConfig {
        grid_size,
        enemy_move_threshold,
        freeze_duration_ticks,
        seed: Some(7),
        ..GameConfig::default()
    }
}

/// A game already in play with the given layout.
pub fn game_with_layout(
    config: GameConfig,
    player: Cell,
    enemies: &[Cell],
    treasures: &[Cell],
    power_ups: &[Cell],
) -> Game<SmallRng> {
    let session = GameSession::from_layout(
        player,
        enemies.iter().copied(),
        treasures.iter().copied(),
        power_ups.iter().copied(),
    );
    Game::with_session(config, session, seeded_rng(1))
}

/// Queues a move and runs the tick that applies it.
pub fn step(game: &mut Game<SmallRng>, direction: Direction) {
    let _ = game.handle_command(GameCommand::MovePlayer(direction));
    game.tick();
}

pub fn tick_n(game: &mut Game<SmallRng>, n: usize) {
    for _ in 0..n {
        game.tick();
    }
}

pub fn enemy_cells(game: &Game<SmallRng>) -> Vec<Cell> {
    game.snapshot().enemies.iter().map(|enemy| enemy.cell).collect()
}

pub fn all_frozen(game: &Game<SmallRng>) -> bool {
    game.snapshot().enemies.iter().all(|enemy| enemy.frozen)
}

pub fn none_frozen(game: &Game<SmallRng>) -> bool {
    game.snapshot().enemies.iter().all(|enemy| !enemy.frozen)
}

/// Collects log output in memory.
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with debug-level logs going to a [`Captured`] buffer and returns them.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(captured.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}
