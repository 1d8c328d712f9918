//! End-to-end planner tests: solve, descend, commit, extend, render.

use marga_nav::{
    append_straight_directions, render_field, CellCoord, Direction, MazeView, Pose, StepMap,
    WallGrid,
};

/// 4x4 test maze with a single route from (0, 0) to (3, 3).
const MAZE_4X4: &str = "\
+-----+-----+-----+-----+
|                       |
+     +-----+-----+     +
|     |           |     |
+     +     +     +     +
|     |     |     |     |
+     +-----+     +     +
|           |           |
+-----+-----+-----+-----+
";

fn replay(start: CellCoord, directions: &[Direction]) -> CellCoord {
    directions.iter().fold(start, |cell, &dir| cell.next(dir))
}

#[test]
fn shortest_path_through_walled_maze() {
    let maze = WallGrid::from_lines(MAZE_4X4, CellCoord::new(0, 0)).unwrap();
    let goal = [CellCoord::new(3, 3)];
    let mut map = StepMap::default();

    let directions = map.shortest_directions(&maze, maze.start_cell(), &goal, true, false);
    // the only route: up the west side, then along the top row
    assert_eq!(
        directions,
        vec![
            Direction::North,
            Direction::North,
            Direction::North,
            Direction::East,
            Direction::East,
            Direction::East,
        ]
    );
    assert_eq!(map.step_at(replay(maze.start_cell(), &directions)), 0);

    // hop-count costs pick the same unique route
    let simple = map.shortest_directions(&maze, maze.start_cell(), &goal, true, true);
    assert_eq!(simple, directions);
}

#[test]
fn unreachable_goal_returns_empty() {
    let maze = WallGrid::from_lines(MAZE_4X4, CellCoord::new(0, 0)).unwrap();
    let mut map = StepMap::default();
    // (8, 8) lies beyond the maze's outer wall
    let directions =
        map.shortest_directions(&maze, maze.start_cell(), &[CellCoord::new(8, 8)], true, false);
    assert!(directions.is_empty());
}

#[test]
fn next_step_plan_commits_only_known_moves() {
    // explored corridor along the south edge, unknown territory beyond
    let mut maze = WallGrid::new(CellCoord::new(0, 0));
    for x in 0..4 {
        maze.set_wall(CellCoord::new(x, 0), Direction::East, false);
    }
    for x in 0..4 {
        maze.set_wall(CellCoord::new(x, 0), Direction::North, true);
    }
    let mut map = StepMap::default();
    map.solve(&maze, &[CellCoord::new(8, 0)], false, false);

    let plan = map.next_step_plan(&maze, Pose::new(CellCoord::new(0, 0), Direction::East));
    // committed up to the last fully-known cell
    assert_eq!(plan.known, vec![Direction::East; 4]);
    assert_eq!(plan.end.cell, CellCoord::new(4, 0));
    // best candidate keeps heading toward the goal through unknown space
    assert_eq!(
        plan.candidates,
        vec![Direction::East, Direction::West, Direction::North]
    );
}

#[test]
fn start_outside_search_clip_is_unreachable() {
    // only a 3x3 corner of the maze is explored
    let mut maze = WallGrid::new(CellCoord::new(0, 0));
    for y in 0..3 {
        for x in 0..3 {
            maze.set_wall(CellCoord::new(x, y), Direction::East, false);
            maze.set_wall(CellCoord::new(x, y), Direction::North, false);
        }
    }
    let goal = [CellCoord::new(0, 0)];
    let mut map = StepMap::default();

    // two cells past the known extent: inside the padded clip, solvable
    let near = map.shortest_directions(&maze, CellCoord::new(4, 4), &goal, false, false);
    assert_eq!(near.len(), 8);

    // three cells past: outside the clip, silently unreachable
    let far = map.shortest_directions(&maze, CellCoord::new(5, 5), &goal, false, false);
    assert!(far.is_empty());

    // a destination expands the clip itself, so solving *to* distant cells
    // from explored territory still works
    let out = map.shortest_directions(
        &maze,
        CellCoord::new(0, 0),
        &[CellCoord::new(10, 10)],
        false,
        false,
    );
    assert_eq!(out.len(), 20);
}

#[test]
fn full_pipeline_descend_extend_render() {
    let maze = WallGrid::from_lines(MAZE_4X4, CellCoord::new(0, 0)).unwrap();
    let goal = [CellCoord::new(3, 3)];
    let mut map = StepMap::default();

    let mut directions = map.shortest_directions(&maze, maze.start_cell(), &goal, true, false);
    let committed = directions.clone();

    // the goal cell is walled on its far side, so nothing to extend
    append_straight_directions(&maze, &mut directions, true, true);
    assert_eq!(directions, committed);

    let text = render_field(&maze, &map, Some((maze.start_cell(), &directions)));
    let arrows = text.matches('^').count() + text.matches('>').count();
    assert_eq!(arrows, directions.len());
}
