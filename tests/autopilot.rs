use dungeon_crawler::app::InputSource;
use dungeon_crawler::autopilot::{choose_move, Autopilot};
use dungeon_crawler::game::{
    events::GameCommand,
    snapshot::{EnemyView, Snapshot},
    GameStage, Outcome,
};
use dungeon_crawler::map::{direction::Direction, grid::Cell};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

fn playing(enemies: &[(Cell, bool)], treasures: &[Cell], power_ups: &[Cell]) -> Snapshot {
    Snapshot {
        stage: GameStage::Playing,
        grid_size: 8,
        player: Cell::ORIGIN,
        enemies: enemies
            .iter()
            .map(|&(cell, frozen)| EnemyView { cell, frozen })
            .collect(),
        treasures: treasures.to_vec(),
        power_ups: power_ups.to_vec(),
        intro: None,
        message: None,
        stats: None,
    }
}

#[test]
fn test_heads_for_treasure() {
    let snapshot = playing(&[], &[Cell::new(3, 0)], &[]);
    assert_eq!(choose_move(&snapshot), Some(Direction::Right));
}

#[test]
fn test_nothing_to_do_without_targets() {
    let snapshot = playing(&[(Cell::new(7, 7), false)], &[], &[Cell::new(0, 5)]);
    assert_eq!(choose_move(&snapshot), None);
}

#[test]
fn test_goes_for_power_up_when_threatened() {
    let snapshot = playing(&[(Cell::new(3, 0), false)], &[Cell::new(5, 0)], &[Cell::new(0, 3)]);
    assert_eq!(choose_move(&snapshot), Some(Direction::Down));
}

#[test]
fn test_frozen_enemies_are_ignored() {
    let snapshot = playing(&[(Cell::new(1, 0), true)], &[Cell::new(2, 0)], &[Cell::new(0, 3)]);
    assert_eq!(choose_move(&snapshot), Some(Direction::Right));
}

#[test]
fn test_falls_back_when_boxed_in() {
    let snapshot = playing(&[(Cell::new(1, 1), false)], &[Cell::new(2, 0)], &[]);
    assert_eq!(choose_move(&snapshot), Some(Direction::Right));
}

#[test]
fn test_poll_drives_rounds_then_quits() {
    let mut autopilot = Autopilot::new(2);

    let intro = Snapshot {
        stage: GameStage::Intro,
        ..playing(&[], &[Cell::new(3, 0)], &[])
    };
    assert_eq!(autopilot.poll(&intro).to_vec(), vec![GameCommand::AnyKey]);

    let play = playing(&[], &[Cell::new(0, 2)], &[]);
    assert_eq!(autopilot.poll(&play).to_vec(), vec![GameCommand::MovePlayer(Direction::Down)]);

    let over = Snapshot {
        stage: GameStage::GameOver(Outcome::Lost),
        ..play
    };
    assert_eq!(autopilot.poll(&over).to_vec(), vec![GameCommand::Restart]);
    assert_that(&autopilot.rounds_left()).is_equal_to(1);
    assert_eq!(autopilot.poll(&over).to_vec(), vec![GameCommand::Quit]);
    assert_that(&autopilot.rounds_left()).is_equal_to(0);
}

#[test]
fn test_at_least_one_round() {
    assert_that(&Autopilot::new(0).rounds_left()).is_equal_to(1);
}
