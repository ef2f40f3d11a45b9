use std::time::Duration;

use dungeon_crawler::constants::profiling::{SUMMARY_INTERVAL, TIMING_WINDOW_SIZE};
use dungeon_crawler::profiling::{Phase, TickTimings};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_mean_per_phase() {
    let mut timings = TickTimings::default();
    timings.record(Phase::Update, Duration::from_millis(10));
    timings.record(Phase::Update, Duration::from_millis(20));
    timings.record(Phase::Present, Duration::from_millis(3));

    assert_eq!(timings.mean(Phase::Update), Some(Duration::from_millis(15)));
    assert_eq!(timings.mean(Phase::Present), Some(Duration::from_millis(3)));
    assert_eq!(timings.mean(Phase::Input), None);
}

#[test]
fn test_window_drops_old_samples() {
    let mut timings = TickTimings::default();
    timings.record(Phase::Input, Duration::from_secs(1));
    for _ in 0..TIMING_WINDOW_SIZE {
        timings.record(Phase::Input, Duration::from_millis(2));
    }
    assert_eq!(timings.mean(Phase::Input), Some(Duration::from_millis(2)));
}

#[test]
fn test_summary_due_on_interval() {
    let mut timings = TickTimings::default();
    for _ in 1..SUMMARY_INTERVAL {
        assert_that(&timings.finish_tick()).is_false();
    }
    assert_that(&timings.finish_tick()).is_true();
    assert_that(&timings.ticks()).is_equal_to(SUMMARY_INTERVAL);
}

#[test]
fn test_summary_line() {
    let mut timings = TickTimings::default();
    assert_eq!(timings.summary(), "ticks=0");

    for _ in 0..1234 {
        timings.finish_tick();
    }
    timings.record(Phase::Update, Duration::from_millis(4));

    assert_eq!(timings.summary(), "ticks=1,234 update=4ms");
}
