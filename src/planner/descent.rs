//! Gradient descent over a solved step map.
//!
//! Reconstructs a direction sequence toward a zero-step cell by walking
//! straight runs whose recorded values exactly reproduce the edge costs the
//! solver used. Supports early termination at the first cell with unknown
//! adjacent walls, so a caller can commit only to moves that cannot be
//! invalidated by later wall discoveries.

use log::{error, trace};

use crate::core::{Direction, Pose};
use crate::maze::MazeView;

use super::kinematics::STEP_MAX;
use super::step_map::StepMap;

impl StepMap {
    /// Walk downhill from `start` toward a zero-step cell.
    ///
    /// `known_only` and `simple_cost` must match the preceding
    /// [`solve`](Self::solve) call: the descent accepts a hop only when the
    /// target cell's recorded step equals the focus step minus the exact
    /// edge cost, first match in [`Direction::CARDINALS`] order winning.
    ///
    /// With `break_on_unknown`, the walk stops before stepping past any cell
    /// adjacent to a wall of unknown state and returns the committed prefix.
    ///
    /// Returns the direction sequence and the pose reached: a zero-step goal,
    /// the unknown-wall break point, or the start itself when it lies outside
    /// the field. A field inconsistent with `start` (solved for other
    /// destinations, or never reaching the start) is a contract violation:
    /// it is logged loudly and yields the partial path built so far.
    pub fn descend(
        &self,
        maze: &impl MazeView,
        start: Pose,
        known_only: bool,
        simple_cost: bool,
        break_on_unknown: bool,
    ) -> (Vec<Direction>, Pose) {
        let mut directions = Vec::new();
        let mut focus = start;
        if !start.cell.is_inside() {
            trace!("[StepMap] descend: start {start} outside the field");
            return (directions, focus);
        }
        loop {
            let focus_step = self.step_at(focus.cell);
            if focus_step == 0 {
                break;
            }
            // scan for the predecessor-consistent hop, fixed direction order
            let mut hop = None;
            'scan: for dir in Direction::CARDINALS {
                let mut probe = focus.cell;
                let mut i = 1;
                loop {
                    if maze.is_wall(probe, dir) || (known_only && !maze.is_known(probe, dir)) {
                        break;
                    }
                    probe = probe.next(dir);
                    // the run cost is monotonic, so once it exceeds the
                    // focus step nothing deeper on this line can match
                    let Some(expected) = focus_step.checked_sub(self.edge_cost(i, simple_cost))
                    else {
                        break;
                    };
                    if self.step_at(probe) == expected {
                        hop = Some((probe, dir));
                        break 'scan;
                    }
                    i += 1;
                }
            }
            let Some((target, dir)) = hop else {
                if focus_step == STEP_MAX {
                    // start never reached by the last solve: plain unreachability
                    trace!("[StepMap] descend: {} unreached by the last solve", focus.cell);
                } else {
                    error!(
                        "[StepMap] descend: no edge-cost-consistent direction at {} (step {}); \
                         field and start disagree",
                        focus.cell, focus_step
                    );
                }
                break;
            };
            // commit the run one cell at a time
            while focus.cell != target {
                if break_on_unknown && maze.unknown_count(focus.cell) > 0 {
                    trace!("[StepMap] descend: stopping at unknown walls around {}", focus.cell);
                    return (directions, focus);
                }
                focus = focus.step(dir);
                directions.push(dir);
            }
        }
        (directions, focus)
    }
}
