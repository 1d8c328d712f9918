//! The maze grid the planner plans over.
//!
//! The planner core only ever sees the read-only [`MazeView`] interface;
//! [`WallGrid`] is the crate's concrete wall store behind it.

mod grid;

pub use grid::WallGrid;

use crate::core::{CellCoord, Direction, WallExtent};

/// Read-only view of the maze the planner consumes.
///
/// Every wall has two independent bits: whether it exists and whether its
/// state is known. Implementations must answer wall queries for cells one
/// step outside the field as well, reporting the field edge as a present,
/// known wall; the solver's straight-line walks rely on that to terminate.
pub trait MazeView {
    /// Is there a wall on `dir` side of `cell`?
    ///
    /// Field edges and fully out-of-field queries report `true`.
    fn is_wall(&self, cell: CellCoord, dir: Direction) -> bool;

    /// Is the wall on `dir` side of `cell` known (observed)?
    ///
    /// Field edges and fully out-of-field queries report `true`.
    fn is_known(&self, cell: CellCoord, dir: Direction) -> bool;

    /// Number of walls adjacent to `cell` whose state is unknown (0..=4).
    fn unknown_count(&self, cell: CellCoord) -> u8;

    /// Bounding rectangle of cells touched by known walls.
    ///
    /// Grows as the maze is explored; the solver bounds its search region
    /// with it.
    fn known_extent(&self) -> WallExtent;

    /// The cell the vehicle's run starts from.
    fn start_cell(&self) -> CellCoord;
}
