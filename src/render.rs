//! Diagnostic ASCII rendering of a solved field.
//!
//! Box-drawing dump of the maze with per-cell step values and an optional
//! path overlay. Known walls render as `|` / `-----`, unknown walls as `.`,
//! and path moves as direction arrows on the wall they cross. The output
//! parses back through [`WallGrid::from_lines`](crate::WallGrid::from_lines).

use std::fmt::Write;

use crate::core::{CellCoord, Direction, GRID_SIZE};
use crate::maze::MazeView;
use crate::planner::StepMap;

/// Canonical identity of the wall on `dir` side of `cell`.
///
/// i16 components so one-past-the-edge queries cannot wrap.
fn wall_id(cell: CellCoord, dir: Direction) -> (i16, i16, u8) {
    match dir {
        Direction::East => (cell.x as i16, cell.y as i16, 0),
        Direction::North => (cell.x as i16, cell.y as i16, 1),
        Direction::West => (cell.x as i16 - 1, cell.y as i16, 0),
        Direction::South => (cell.x as i16, cell.y as i16 - 1, 1),
    }
}

/// Render the maze and field, with an optional path overlay.
///
/// `path` is a start cell plus the direction sequence taken from it; each
/// move is drawn as an arrow on the wall it crosses.
pub fn render_field(
    maze: &impl MazeView,
    map: &StepMap,
    path: Option<(CellCoord, &[Direction])>,
) -> String {
    // each path move, keyed by the wall it crosses
    let mut moves: Vec<((i16, i16, u8), Direction)> = Vec::new();
    if let Some((start, directions)) = path {
        let mut cell = start;
        for &dir in directions {
            moves.push((wall_id(cell, dir), dir));
            cell = cell.next(dir);
        }
    }
    let move_on = |cell: CellCoord, dir: Direction| -> Option<Direction> {
        let id = wall_id(cell, dir);
        moves.iter().find(|(m, _)| *m == id).map(|&(_, d)| d)
    };

    let size = GRID_SIZE as i8;
    let mut out = String::new();
    for y in (0..=size).rev() {
        // vertical wall line with cell values (skipped above the top row)
        if y != size {
            for x in 0..=size {
                let cell = CellCoord::new(x, y);
                if let Some(dir) = move_on(cell, Direction::West) {
                    out.push(dir.arrow());
                } else if !maze.is_known(cell, Direction::West) {
                    out.push('.');
                } else if maze.is_wall(cell, Direction::West) {
                    out.push('|');
                } else {
                    out.push(' ');
                }
                if x != size {
                    let _ = write!(out, "{:>5}", map.step_at(cell));
                }
            }
            out.push('\n');
        }
        // horizontal wall line: south walls of row y
        for x in 0..size {
            let cell = CellCoord::new(x, y);
            out.push('+');
            if let Some(dir) = move_on(cell, Direction::South) {
                let _ = write!(out, "  {}  ", dir.arrow());
            } else if !maze.is_known(cell, Direction::South) {
                out.push_str("  .  ");
            } else if maze.is_wall(cell, Direction::South) {
                out.push_str("-----");
            } else {
                out.push_str("     ");
            }
        }
        out.push_str("+\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::WallGrid;

    #[test]
    fn test_render_shows_goal_and_walls() {
        let maze = WallGrid::open(CellCoord::new(0, 0));
        let mut map = StepMap::default();
        map.solve(&maze, &[CellCoord::new(0, 0)], false, true);
        let text = render_field(&maze, &map, None);

        // 33 horizontal lines interleaved with 32 cell lines
        assert_eq!(text.lines().count(), 2 * GRID_SIZE + 1);
        // the goal cell holds 0, the outer border is walled
        assert!(text.lines().last().unwrap().starts_with("+-----+"));
        let goal_row = text.lines().nth(2 * GRID_SIZE - 1).unwrap();
        assert!(goal_row.starts_with("|    0"));
    }

    #[test]
    fn test_render_overlays_path() {
        let maze = WallGrid::open(CellCoord::new(0, 0));
        let mut map = StepMap::default();
        map.solve(&maze, &[CellCoord::new(3, 0)], false, true);
        let directions = [Direction::East, Direction::East, Direction::East];
        let text = render_field(&maze, &map, Some((CellCoord::new(0, 0), &directions)));
        assert_eq!(text.matches('>').count(), 3);
    }

    #[test]
    fn test_render_roundtrips_through_parser() {
        let mut maze = WallGrid::open(CellCoord::new(0, 0));
        maze.set_wall(CellCoord::new(2, 1), Direction::North, true);
        let mut map = StepMap::default();
        map.solve(&maze, &[CellCoord::new(0, 0)], false, true);
        let text = render_field(&maze, &map, None);

        let parsed = WallGrid::from_lines(&text, CellCoord::new(0, 0)).unwrap();
        assert!(parsed.is_wall(CellCoord::new(2, 1), Direction::North));
        assert!(!parsed.is_wall(CellCoord::new(5, 5), Direction::North));
    }
}
