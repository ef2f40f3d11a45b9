use dungeon_crawler::error::{GameError, PlatformError};
use dungeon_crawler::platform;
use speculoos::prelude::*;

#[test]
fn test_logging_installs_once() {
    assert_that(&platform::init_logging().is_ok()).is_true();

    let second = platform::init_logging();
    assert_that(&matches!(second, Err(GameError::Platform(PlatformError::LoggingInit(_))))).is_true();
}
