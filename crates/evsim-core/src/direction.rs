//! Travel direction, derived from a current and a destination floor.

/// Direction of travel. `UP` is the positive floor delta.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Derive a direction from `current` towards `destination`.
    ///
    /// Returns `None` when `destination == current` (no direction implied).
    pub fn towards(current: u32, destination: u32) -> Option<Direction> {
        if destination > current {
            Some(Direction::Up)
        } else if destination < current {
            Some(Direction::Down)
        } else {
            None
        }
    }

    pub fn flip(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}
