//! Ranked next-step candidates at an exploration frontier.

use crate::core::{Direction, Pose, RelativeDirection};
use crate::maze::MazeView;

use super::kinematics::STEP_MAX;
use super::step_map::StepMap;

impl StepMap {
    /// Admissible single-step directions from `pose`, best first.
    ///
    /// Keeps the relative front/left/right/back moves with no wall and a
    /// finite target step, ranked by one multi-key comparator: ascending
    /// target step, then targets with unknown adjacent walls, then the
    /// current heading. Empty when every neighbor is walled off or
    /// unreached.
    pub fn next_direction_candidates(&self, maze: &impl MazeView, pose: Pose) -> Vec<Direction> {
        let mut directions: Vec<Direction> = [
            RelativeDirection::Front,
            RelativeDirection::Left,
            RelativeDirection::Right,
            RelativeDirection::Back,
        ]
        .into_iter()
        .map(|turn| pose.heading.rotate(turn))
        .filter(|&dir| {
            !maze.is_wall(pose.cell, dir) && self.step_at(pose.cell.next(dir)) != STEP_MAX
        })
        .collect();

        directions.sort_by_key(|&dir| {
            let target = pose.cell.next(dir);
            (
                self.step_at(target),
                maze.unknown_count(target) == 0,
                dir != pose.heading,
            )
        });
        directions
    }
}
