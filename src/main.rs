use std::env;
use std::io;

use anyhow::{Context, Result};
use dungeon_crawler::{
    app::App, autopilot::Autopilot, config::GameConfig, constants::autopilot::DEFAULT_ROUNDS, game::Game, platform,
    render::TextRenderer,
};
use tracing::info;

/// Value following `flag` on the command line, parsed.
fn flag_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match args.iter().position(|arg| arg == flag) {
        Some(index) => {
            let raw = args.get(index + 1).with_context(|| format!("{flag} needs a value"))?;
            let value = raw.parse().with_context(|| format!("Invalid value for {flag}: {raw}"))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Runs the game with the autopilot at the controls, drawing frames to stdout.
///
/// `--seed N` fixes the layout, `--rounds N` sets how many sessions are played.
pub fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    platform::init_logging().context("Could not initialize logging")?;

    let mut config = GameConfig::load().context("Could not load configuration")?;
    if let Some(seed) = flag_value(&args, "--seed")? {
        config.seed = Some(seed);
    }
    let rounds = flag_value(&args, "--rounds")?.unwrap_or(DEFAULT_ROUNDS);

    info!(loop_time = ?config.tick_interval(), grid = config.grid_size, seed = ?config.seed, rounds, "Starting game loop");

    let game = Game::new(config);
    let mut app = App::new(game, Autopilot::new(rounds), TextRenderer::new(io::stdout(), true));
    loop {
        if !app.run() {
            break;
        }
    }

    info!(ticks = app.game().ticks(), "Exiting");
    Ok(())
}
