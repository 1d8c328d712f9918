//! Fundamental value types: coordinates, directions, poses.

mod coords;
mod direction;
mod pose;

pub use coords::{CellCoord, WallExtent, CELL_COUNT, GRID_SIZE};
pub use direction::{Direction, RelativeDirection};
pub use pose::Pose;
