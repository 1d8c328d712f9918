//! Greedy extension of a finished direction sequence.
//!
//! Continues a path through already-traversable space without re-solving
//! the field. Kept as an isolated post-processing pass: the diagonal
//! shortcut below encodes vehicle capability (cutting a corner as two
//! grid-aligned moves), not grid geometry.

use crate::core::{Direction, RelativeDirection};
use crate::maze::MazeView;

/// Append further moves to `directions` while physically possible.
///
/// The sequence is replayed from the maze's start cell to find its end.
/// With `diag_enabled` and a trailing left or right turn, the extension
/// alternates the opposite turn with the current heading to emulate a 45°
/// shortcut; otherwise it continues straight. Stops at the first position
/// where no candidate move is walkable (wall present, or unknown under
/// `known_only`). Sequences shorter than two moves have no trailing turn to
/// extend and are left untouched.
pub fn append_straight_directions(
    maze: &impl MazeView,
    directions: &mut Vec<Direction>,
    known_only: bool,
    diag_enabled: bool,
) {
    let mut cell = maze.start_cell();
    for &dir in directions.iter() {
        cell = cell.next(dir);
    }
    if directions.len() < 2 {
        return;
    }
    let mut prev_dir = directions[directions.len() - 2];
    let mut dir = directions[directions.len() - 1];
    loop {
        let candidates: [Option<Direction>; 2] = if diag_enabled {
            match dir.relative_to(prev_dir) {
                RelativeDirection::Left => {
                    [Some(dir.rotate(RelativeDirection::Right)), Some(dir)]
                }
                RelativeDirection::Right => {
                    [Some(dir.rotate(RelativeDirection::Left)), Some(dir)]
                }
                _ => [Some(dir), None],
            }
        } else {
            [Some(dir), None]
        };
        let mut advanced = false;
        for candidate in candidates.into_iter().flatten() {
            if !maze.is_wall(cell, candidate) && (!known_only || maze.is_known(cell, candidate)) {
                directions.push(candidate);
                cell = cell.next(candidate);
                prev_dir = dir;
                dir = candidate;
                advanced = true;
                break;
            }
        }
        if !advanced {
            break;
        }
    }
}
