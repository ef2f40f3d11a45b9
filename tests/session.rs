mod common;

use std::time::Duration;

use common::{capture_logs, game_with_layout, seeded_rng, step, test_config, NEVER};
use dungeon_crawler::config::GameConfig;
use dungeon_crawler::entity::Positioned;
use dungeon_crawler::game::{session::GameSession, Game, GameStage, Outcome};
use dungeon_crawler::map::{direction::Direction, grid::Cell};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_random_layouts_respect_counts_and_bounds() {
    let config = GameConfig::default();
    let grid = config.grid();

    for seed in 0..200 {
        let session = GameSession::new(&config, &mut seeded_rng(seed));

        assert_eq!(session.player().cell(), Cell::ORIGIN);
        assert_that(&session.enemies().len()).is_equal_to(config.enemy_count);
        assert_that(&session.treasures().len()).is_equal_to(config.treasure_count);
        assert_that(&session.power_ups().len()).is_equal_to(config.power_up_count);

        for enemy in session.enemies() {
            assert_that(&grid.contains(enemy.cell())).is_true();
            assert_that(&enemy.cell()).is_not_equal_to(Cell::ORIGIN);
            assert_that(&enemy.is_frozen()).is_false();
        }
        for cell in session
            .treasures()
            .iter()
            .map(Positioned::cell)
            .chain(session.power_ups().iter().map(Positioned::cell))
        {
            assert_that(&grid.contains(cell)).is_true();
        }

        assert_that(&session.treasures_collected()).is_equal_to(0);
        assert_that(&session.freeze_timer()).is_equal_to(0);
        assert_that(&session.enemy_move_counter()).is_equal_to(0);
        assert_that(&session.is_over()).is_false();
    }
}

#[test]
fn test_smallest_grid_keeps_enemies_off_origin() {
    let config = test_config(2, 1, 1);
    for seed in 0..50 {
        let session = GameSession::new(&config, &mut seeded_rng(seed));
        assert_that(&session.enemies().iter().all(|enemy| enemy.cell() != Cell::ORIGIN)).is_true();
    }
}

#[test]
fn test_same_seed_same_layout() {
    let config = test_config(20, 3, 100);
    let a = Game::new(config.clone());
    let b = Game::new(config);

    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.stage(), GameStage::Intro);
}

#[test]
fn test_from_layout_keeps_enemy_order() {
    let enemies = [Cell::new(3, 1), Cell::new(1, 3), Cell::new(2, 2)];
    let session = GameSession::from_layout(Cell::new(1, 1), enemies, [Cell::new(0, 1)], []);

    let cells: Vec<Cell> = session.enemies().iter().map(Positioned::cell).collect();
    assert_eq!(cells, enemies.to_vec());
    assert_eq!(session.player().cell(), Cell::new(1, 1));
    assert_that(&session.power_ups().is_empty()).is_true();
}

#[test]
fn test_duration_is_fixed_when_session_ends() {
    let mut game = game_with_layout(
        test_config(5, NEVER, 10),
        Cell::ORIGIN,
        &[Cell::new(1, 0)],
        &[Cell::new(4, 4)],
        &[],
    );
    assert_that(&game.session().final_duration()).is_none();

    step(&mut game, Direction::Right);
    assert_eq!(game.session().outcome(), Some(Outcome::Lost));

    let recorded = game.session().final_duration();
    assert_that(&recorded).is_some();
    std::thread::sleep(Duration::from_millis(5));
    assert_eq!(game.session().final_duration(), recorded);
    assert_eq!(Some(game.session().elapsed()), recorded);
}

#[test]
fn test_layout_log_carries_seed() {
    let config = GameConfig {
        seed: Some(99),
        ..GameConfig::default()
    };

    let logs = capture_logs(|| {
        GameSession::new(&config, &mut seeded_rng(99));
    });

    assert_that(&logs.contains("New session laid out")).is_true();
    assert_that(&logs.contains("seed=Some(99)")).is_true();
}
