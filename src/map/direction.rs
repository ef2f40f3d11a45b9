use glam::IVec2;

/// One of the four axis-aligned steps a player can take.
///
/// Rows grow downward, so `Up` decreases the row index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn as_ivec2(&self) -> IVec2 {
        (*self).into()
    }

    /// Returns the direction of a single unit step, if `delta` is one.
    pub fn from_delta(delta: IVec2) -> Option<Direction> {
        Self::DIRECTIONS.into_iter().find(|direction| direction.as_ivec2() == delta)
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_as_ivec2() {
        assert_eq!(Direction::Up.as_ivec2(), -IVec2::Y);
        assert_eq!(Direction::Down.as_ivec2(), IVec2::Y);
        assert_eq!(Direction::Left.as_ivec2(), -IVec2::X);
        assert_eq!(Direction::Right.as_ivec2(), IVec2::X);
    }

    #[test]
    fn test_direction_from_delta() {
        for direction in Direction::DIRECTIONS {
            assert_eq!(Direction::from_delta(direction.as_ivec2()), Some(direction));
        }
        assert_eq!(Direction::from_delta(IVec2::ZERO), None);
        assert_eq!(Direction::from_delta(IVec2::new(1, 1)), None);
        assert_eq!(Direction::from_delta(IVec2::new(0, 2)), None);
    }

    #[test]
    fn test_directions_constant() {
        assert_eq!(Direction::DIRECTIONS.len(), 4);
        for (i, a) in Direction::DIRECTIONS.iter().enumerate() {
            for b in &Direction::DIRECTIONS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
