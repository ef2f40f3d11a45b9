use crate::map::direction::Direction;

/// Raw input events handed to the game by the input layer.
///
/// The input layer does no filtering; the game decides what each event means in
/// its current stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    MovePlayer(Direction),
    Restart,
    Quit,
    /// Any other key press. Only meaningful on the intro screen.
    AnyKey,
}

impl From<Direction> for GameCommand {
    fn from(direction: Direction) -> Self {
        GameCommand::MovePlayer(direction)
    }
}
