//! Dense wall-bit storage for the maze grid.
//!
//! Walls are stored once per physical wall segment in two flat arrays
//! (existence and knowledge), indexed by the canonical east/north wall of a
//! base cell. Queries from either adjacent cell resolve to the same slot, so
//! the two sides can never disagree.

use log::debug;

use crate::core::{CellCoord, Direction, WallExtent, CELL_COUNT, GRID_SIZE};
use crate::error::{MargaError, Result};

use super::MazeView;

/// Concrete maze store with per-wall existence and knowledge bits.
///
/// Unset walls are unknown and absent; the field edge is always a present,
/// known wall. Setting any wall marks it known and grows the known extent.
#[derive(Clone, Debug)]
pub struct WallGrid {
    /// Wall existence bits, east walls then north walls, one per base cell.
    wall_present: Vec<bool>,
    /// Wall knowledge bits, same layout as `wall_present`.
    wall_known: Vec<bool>,
    /// Bounding rectangle of cells with known walls.
    extent: WallExtent,
    /// The vehicle's start cell.
    start: CellCoord,
}

/// Canonical storage slot of the wall on `dir` side of `cell`.
///
/// `None` means the wall is the field edge (or fully outside the field) and
/// has no stored state.
fn wall_slot(cell: CellCoord, dir: Direction) -> Option<usize> {
    let (base, axis) = match dir {
        Direction::East => (cell, 0),
        Direction::North => (cell, 1),
        Direction::West => (cell.next(Direction::West), 0),
        Direction::South => (cell.next(Direction::South), 1),
    };
    if !base.is_inside() {
        return None;
    }
    let far = if axis == 0 {
        base.next(Direction::East)
    } else {
        base.next(Direction::North)
    };
    if !far.is_inside() {
        return None;
    }
    Some(axis * CELL_COUNT + base.index())
}

impl WallGrid {
    /// Create a grid with every interior wall unknown
    pub fn new(start: CellCoord) -> Self {
        Self {
            wall_present: vec![false; 2 * CELL_COUNT],
            wall_known: vec![false; 2 * CELL_COUNT],
            extent: WallExtent::from_cell(start),
            start,
        }
    }

    /// Create a fully explored grid with every interior wall absent
    pub fn open(start: CellCoord) -> Self {
        let mut grid = Self::new(start);
        for index in 0..CELL_COUNT {
            let cell = CellCoord::from_index(index);
            for dir in [Direction::East, Direction::North] {
                if let Some(slot) = wall_slot(cell, dir) {
                    grid.wall_known[slot] = true;
                }
            }
        }
        grid.extent = WallExtent::full();
        grid
    }

    /// Record the state of one wall, marking it known.
    ///
    /// Returns `false` for field-edge and out-of-field walls, whose state is
    /// fixed and not stored.
    pub fn set_wall(&mut self, cell: CellCoord, dir: Direction, present: bool) -> bool {
        match wall_slot(cell, dir) {
            Some(slot) => {
                self.wall_present[slot] = present;
                self.wall_known[slot] = true;
                self.extent.expand_to_include(cell);
                true
            }
            None => false,
        }
    }

    /// Parse a grid from box-drawing text (the shape [`render_field`] emits).
    ///
    /// Cells are 5 characters wide on a 6-column pitch. The centre character
    /// of each horizontal wall segment and the character on each cell's west
    /// column decide the wall: `-` / `|` present, `.` unknown, anything else
    /// absent. The parsed block is placed with its south-west cell at (0, 0);
    /// the rest of the field stays unknown.
    ///
    /// [`render_field`]: crate::render::render_field
    pub fn from_lines(text: &str, start: CellCoord) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.len() < 3 || lines.len() % 2 == 0 {
            return Err(MargaError::Parse(format!(
                "expected an odd number of rows >= 3, got {}",
                lines.len()
            )));
        }
        let height = (lines.len() - 1) / 2;
        let width = lines[0].matches('+').count().saturating_sub(1);
        if width == 0 || width > GRID_SIZE || height > GRID_SIZE {
            return Err(MargaError::Parse(format!(
                "unsupported maze size {width}x{height}"
            )));
        }
        for (row, line) in lines.iter().enumerate().step_by(2) {
            for x in 0..=width {
                if line.as_bytes().get(6 * x).copied() != Some(b'+') {
                    return Err(MargaError::Parse(format!(
                        "misaligned pillar at row {row}, column {}",
                        6 * x
                    )));
                }
            }
        }

        let char_at = |line: &str, col: usize| line.as_bytes().get(col).copied().unwrap_or(b' ');
        let mut grid = Self::new(start);
        for y in 0..height {
            let above = lines[2 * (height - 1 - y)];
            let middle = lines[2 * (height - 1 - y) + 1];
            let below = lines[2 * (height - 1 - y) + 2];
            for x in 0..width {
                let cell = CellCoord::new(x as i8, y as i8);
                let walls = [
                    (Direction::North, char_at(above, 6 * x + 3)),
                    (Direction::South, char_at(below, 6 * x + 3)),
                    (Direction::West, char_at(middle, 6 * x)),
                    (Direction::East, char_at(middle, 6 * (x + 1))),
                ];
                for (dir, ch) in walls {
                    match ch {
                        b'-' | b'|' => {
                            grid.set_wall(cell, dir, true);
                        }
                        b'.' => {} // unknown, leave unset
                        _ => {
                            grid.set_wall(cell, dir, false);
                        }
                    }
                }
            }
        }
        debug!("[WallGrid] parsed {width}x{height} maze block");
        Ok(grid)
    }
}

impl MazeView for WallGrid {
    #[inline]
    fn is_wall(&self, cell: CellCoord, dir: Direction) -> bool {
        match wall_slot(cell, dir) {
            Some(slot) => self.wall_present[slot],
            None => true,
        }
    }

    #[inline]
    fn is_known(&self, cell: CellCoord, dir: Direction) -> bool {
        match wall_slot(cell, dir) {
            Some(slot) => self.wall_known[slot],
            None => true,
        }
    }

    fn unknown_count(&self, cell: CellCoord) -> u8 {
        Direction::CARDINALS
            .iter()
            .filter(|&&dir| !self.is_known(cell, dir))
            .count() as u8
    }

    #[inline]
    fn known_extent(&self) -> WallExtent {
        self.extent
    }

    #[inline]
    fn start_cell(&self) -> CellCoord {
        self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_unknown() {
        let grid = WallGrid::new(CellCoord::new(0, 0));
        let cell = CellCoord::new(5, 5);
        assert!(!grid.is_wall(cell, Direction::East));
        assert!(!grid.is_known(cell, Direction::East));
        assert_eq!(grid.unknown_count(cell), 4);
    }

    #[test]
    fn test_field_edges_present_and_known() {
        let grid = WallGrid::new(CellCoord::new(0, 0));
        assert!(grid.is_wall(CellCoord::new(0, 0), Direction::West));
        assert!(grid.is_wall(CellCoord::new(0, 0), Direction::South));
        assert!(grid.is_wall(CellCoord::new(31, 31), Direction::East));
        assert!(grid.is_known(CellCoord::new(31, 31), Direction::North));
        // one past the edge still reports the boundary wall
        assert!(grid.is_wall(CellCoord::new(0, 32), Direction::South));
    }

    #[test]
    fn test_shared_wall_consistency() {
        let mut grid = WallGrid::new(CellCoord::new(0, 0));
        assert!(grid.set_wall(CellCoord::new(3, 3), Direction::East, true));
        assert!(grid.is_wall(CellCoord::new(4, 3), Direction::West));
        assert!(grid.is_known(CellCoord::new(4, 3), Direction::West));

        assert!(grid.set_wall(CellCoord::new(7, 7), Direction::South, false));
        assert!(!grid.is_wall(CellCoord::new(7, 6), Direction::North));
        assert!(grid.is_known(CellCoord::new(7, 6), Direction::North));
    }

    #[test]
    fn test_set_wall_rejects_edges() {
        let mut grid = WallGrid::new(CellCoord::new(0, 0));
        assert!(!grid.set_wall(CellCoord::new(0, 0), Direction::West, false));
        assert!(grid.is_wall(CellCoord::new(0, 0), Direction::West));
    }

    #[test]
    fn test_extent_tracks_known_walls() {
        let mut grid = WallGrid::new(CellCoord::new(0, 0));
        grid.set_wall(CellCoord::new(2, 6), Direction::East, true);
        grid.set_wall(CellCoord::new(9, 1), Direction::North, false);
        let extent = grid.known_extent();
        assert_eq!(extent.min, CellCoord::new(0, 0));
        assert_eq!(extent.max, CellCoord::new(9, 6));
    }

    #[test]
    fn test_open_grid() {
        let grid = WallGrid::open(CellCoord::new(0, 0));
        let cell = CellCoord::new(10, 10);
        assert_eq!(grid.unknown_count(cell), 0);
        assert!(!grid.is_wall(cell, Direction::North));
        assert_eq!(grid.known_extent(), WallExtent::full());
    }

    #[test]
    fn test_from_lines() {
        let text = "\
+-----+-----+
|           .
+     +-----+
|     |     |
+-----+-----+
";
        let grid = WallGrid::from_lines(text, CellCoord::new(0, 0)).unwrap();
        // interior wall between (0,0) and (1,0)
        assert!(grid.is_wall(CellCoord::new(0, 0), Direction::East));
        // open wall between (0,0) and (0,1)
        assert!(!grid.is_wall(CellCoord::new(0, 0), Direction::North));
        assert!(grid.is_known(CellCoord::new(0, 0), Direction::North));
        // wall between (1,0) and (1,1) is present
        assert!(grid.is_wall(CellCoord::new(1, 0), Direction::North));
        // east wall of (1,1) is unknown
        assert!(!grid.is_known(CellCoord::new(1, 1), Direction::East));
    }

    #[test]
    fn test_from_lines_rejects_garbage() {
        assert!(WallGrid::from_lines("nonsense", CellCoord::new(0, 0)).is_err());
        assert!(WallGrid::from_lines("+--\n|\n+--\n", CellCoord::new(0, 0)).is_err());
    }
}
