//! Cell-resolution pose: where the vehicle is and which way it faces.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::coords::CellCoord;
use super::direction::Direction;

/// Position and heading at cell resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pose {
    /// The cell the vehicle occupies.
    pub cell: CellCoord,
    /// The direction the vehicle faces.
    pub heading: Direction,
}

impl Pose {
    /// Create a new pose
    #[inline]
    pub const fn new(cell: CellCoord, heading: Direction) -> Self {
        Self { cell, heading }
    }

    /// The pose after moving one cell in `dir` (heading follows the move)
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        Self {
            cell: self.cell.next(dir),
            heading: dir,
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.cell, self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_updates_heading() {
        let pose = Pose::new(CellCoord::new(1, 1), Direction::East);
        let stepped = pose.step(Direction::North);
        assert_eq!(stepped.cell, CellCoord::new(1, 2));
        assert_eq!(stepped.heading, Direction::North);
    }
}
