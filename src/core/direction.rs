//! Heading directions and relative turns.
//!
//! Absolute headings are the four cardinals in counter-clockwise order;
//! relative turns compose with them (`heading.rotate(turn)`) to produce a
//! new heading. Path extraction walks the cardinals in a fixed enumeration
//! order, so [`Direction::CARDINALS`] is part of the planner's contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute heading on the grid, counter-clockwise order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// Toward +x
    #[default]
    East = 0,
    /// Toward +y
    North = 1,
    /// Toward -x
    West = 2,
    /// Toward -y
    South = 3,
}

/// Turn relative to the current heading, counter-clockwise order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RelativeDirection {
    /// Keep heading
    Front = 0,
    /// 90° counter-clockwise
    Left = 1,
    /// 180°
    Back = 2,
    /// 90° clockwise
    Right = 3,
}

impl Direction {
    /// The four cardinals in the planner's fixed enumeration order.
    pub const CARDINALS: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    #[inline]
    fn from_u8(value: u8) -> Self {
        match value & 3 {
            0 => Direction::East,
            1 => Direction::North,
            2 => Direction::West,
            _ => Direction::South,
        }
    }

    /// Compose this heading with a relative turn
    #[inline]
    pub fn rotate(self, turn: RelativeDirection) -> Direction {
        Self::from_u8(self as u8 + turn as u8)
    }

    /// The opposite heading
    #[inline]
    pub fn opposite(self) -> Direction {
        self.rotate(RelativeDirection::Back)
    }

    /// The turn that takes `reference` to this heading
    #[inline]
    pub fn relative_to(self, reference: Direction) -> RelativeDirection {
        match (self as u8).wrapping_sub(reference as u8) & 3 {
            0 => RelativeDirection::Front,
            1 => RelativeDirection::Left,
            2 => RelativeDirection::Back,
            _ => RelativeDirection::Right,
        }
    }

    /// Unit cell offset of this heading
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::East => (1, 0),
            Direction::North => (0, 1),
            Direction::West => (-1, 0),
            Direction::South => (0, -1),
        }
    }

    /// Single-character arrow for diagnostic rendering
    #[inline]
    pub fn arrow(self) -> char {
        match self {
            Direction::East => '>',
            Direction::North => '^',
            Direction::West => '<',
            Direction::South => 'v',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::East => "East",
            Direction::North => "North",
            Direction::West => "West",
            Direction::South => "South",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_composition() {
        assert_eq!(
            Direction::East.rotate(RelativeDirection::Left),
            Direction::North
        );
        assert_eq!(
            Direction::East.rotate(RelativeDirection::Right),
            Direction::South
        );
        assert_eq!(
            Direction::South.rotate(RelativeDirection::Left),
            Direction::East
        );
        for dir in Direction::CARDINALS {
            assert_eq!(dir.rotate(RelativeDirection::Front), dir);
            assert_eq!(dir.rotate(RelativeDirection::Back), dir.opposite());
        }
    }

    #[test]
    fn test_opposite_involution() {
        for dir in Direction::CARDINALS {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_relative_to_roundtrip() {
        for reference in Direction::CARDINALS {
            for dir in Direction::CARDINALS {
                let turn = dir.relative_to(reference);
                assert_eq!(reference.rotate(turn), dir);
            }
        }
    }

    #[test]
    fn test_delta_matches_opposite() {
        for dir in Direction::CARDINALS {
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
