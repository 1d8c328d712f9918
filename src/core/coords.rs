//! Cell coordinates and extents for the maze grid.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::direction::Direction;

/// Side length of the (square) maze field in cells.
///
/// The grid is a compile-time bound: every coordinate, wall index and step
/// array is sized from this constant.
pub const GRID_SIZE: usize = 32;

/// Total number of cells in the field.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Grid coordinates (integer cell indices).
///
/// Cell (0, 0) is the south-west corner; x grows east, y grows north.
/// Coordinates outside `[0, GRID_SIZE)` are representable (walks may probe
/// one cell past the field edge) but map to no stored cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellCoord {
    /// X coordinate (column index)
    pub x: i8,
    /// Y coordinate (row index)
    pub y: i8,
}

impl CellCoord {
    /// Create a new cell coordinate
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Check if the coordinate lies inside the field
    #[inline]
    pub fn is_inside(self) -> bool {
        self.x >= 0
            && self.y >= 0
            && (self.x as usize) < GRID_SIZE
            && (self.y as usize) < GRID_SIZE
    }

    /// Dense linear index for array storage.
    ///
    /// Bijective over in-field coordinates; callers must check
    /// [`is_inside`](Self::is_inside) first.
    #[inline]
    pub fn index(self) -> usize {
        self.y as usize * GRID_SIZE + self.x as usize
    }

    /// Reconstruct a coordinate from its dense index
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::new((index % GRID_SIZE) as i8, (index / GRID_SIZE) as i8)
    }

    /// The adjacent cell one step in the given direction
    #[inline]
    pub fn next(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned cell rectangle tracking the explored part of the field.
///
/// Grows as walls become known; the field solver uses it to bound its
/// search region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallExtent {
    /// Minimum corner (smallest x and y).
    pub min: CellCoord,
    /// Maximum corner (largest x and y).
    pub max: CellCoord,
}

impl WallExtent {
    /// Extent covering a single cell
    #[inline]
    pub fn from_cell(cell: CellCoord) -> Self {
        Self {
            min: cell,
            max: cell,
        }
    }

    /// Grow the extent to include the given cell
    #[inline]
    pub fn expand_to_include(&mut self, cell: CellCoord) {
        self.min.x = self.min.x.min(cell.x);
        self.min.y = self.min.y.min(cell.y);
        self.max.x = self.max.x.max(cell.x);
        self.max.y = self.max.y.max(cell.y);
    }

    /// Extent covering the whole field
    #[inline]
    pub fn full() -> Self {
        Self {
            min: CellCoord::new(0, 0),
            max: CellCoord::new(GRID_SIZE as i8 - 1, GRID_SIZE as i8 - 1),
        }
    }
}

impl Default for WallExtent {
    fn default() -> Self {
        Self::from_cell(CellCoord::default())
    }
}
