//! Inertia-based movement model.
//!
//! A participant's displacement accumulates from turn to turn: each turn the
//! chosen [`Direction`] nudges the previous displacement by at most one cell on
//! each axis. The point reached by inertia alone is the *center*; the nine
//! candidate destinations surround it.

use crate::state::{Displacement, Position};

/// One of the eight compass adjustments, or no adjustment at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "UP")]
    Up,
    #[strum(to_string = "DOWN")]
    Down,
    #[strum(to_string = "LEFT")]
    Left,
    #[strum(to_string = "RIGHT")]
    Right,
    #[strum(to_string = "UPLEFT")]
    UpLeft,
    #[strum(to_string = "UPRIGHT")]
    UpRight,
    #[strum(to_string = "DOWNLEFT")]
    DownLeft,
    #[strum(to_string = "DOWNRIGHT")]
    DownRight,
    /// Keep the current displacement unchanged.
    #[strum(to_string = "CENTER", serialize = "NONE")]
    Center,
}

impl Direction {
    pub const ALL: [Direction; 9] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
        Direction::Center,
    ];

    /// Unit vector in `{-1, 0, 1}²`. `y` grows downwards, so `Up` is `(0, -1)`.
    pub const fn unit(self) -> Displacement {
        let (dx, dy) = match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
            Direction::Center => (0, 0),
        };
        Displacement::new(dx, dy)
    }
}

/// Where inertia alone carries a participant this turn.
pub fn center(position: Position, last: Displacement) -> Position {
    position + last
}

/// Displacement after applying `direction` on top of the retained inertia.
pub fn next_displacement(last: Displacement, direction: Direction) -> Displacement {
    last + direction.unit()
}

/// Candidate destination for `direction`; equal to `center(..) + unit(direction)`.
pub fn next_position(position: Position, last: Displacement, direction: Direction) -> Position {
    position + next_displacement(last, direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn center_applies_inertia_only() {
        let position = Position::new(4, 4);
        assert_eq!(center(position, Displacement::new(2, -1)), Position::new(6, 3));
        assert_eq!(center(position, Displacement::ZERO), position);
    }

    #[test]
    fn no_change_keeps_large_inertia() {
        let last = Displacement::new(5, -3);
        assert_eq!(next_displacement(last, Direction::Center), last);
        assert_eq!(
            next_position(Position::ORIGIN, last, Direction::Center),
            Position::new(5, -3)
        );
    }

    #[test]
    fn counter_steering_decelerates() {
        let last = Displacement::new(2, 0);
        assert_eq!(
            next_displacement(last, Direction::Left),
            Displacement::new(1, 0)
        );
        assert_eq!(
            next_displacement(last, Direction::UpLeft),
            Displacement::new(1, -1)
        );
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(Direction::from_str("upleft"), Ok(Direction::UpLeft));
        assert_eq!(Direction::from_str("DOWN"), Ok(Direction::Down));
        assert_eq!(Direction::from_str("none"), Ok(Direction::Center));
        assert_eq!(Direction::Center.to_string(), "CENTER");
        assert!(Direction::from_str("sideways").is_err());
    }
}
