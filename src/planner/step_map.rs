//! Step map storage and the multi-source field solver.
//!
//! The step map holds one cost value per cell: the minimum accumulated
//! travel time from that cell to the nearest destination under the active
//! cost model and wall-knowledge policy. It is recomputed from scratch on
//! every [`StepMap::solve`] call and read-only between solves.

use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::{CellCoord, Direction, Pose, CELL_COUNT};
use crate::maze::MazeView;

use super::kinematics::{CostTable, KinematicsConfig, Step, STEP_MAX};

/// An update reservation in the solver's priority queue.
///
/// Carries the cost at enqueue time; popped entries whose cost no longer
/// matches the cell's current value are stale and discarded (lazy deletion).
#[derive(Clone, Copy, Debug, Eq)]
struct QueueEntry {
    cell: CellCoord,
    step: Step,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.step == other.step
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other.step.cmp(&self.step)
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of a partial descent for incremental path commitment.
#[derive(Clone, Debug)]
pub struct StepPlan {
    /// Moves whose correctness no longer depends on unknown walls.
    pub known: Vec<Direction>,
    /// Ranked single-step options at the end of the known section.
    pub candidates: Vec<Direction>,
    /// Where the known section ends.
    pub end: Pose,
}

/// Multi-source weighted distance field over the maze grid.
///
/// Owns the per-cell step array and the precomputed straight-run cost
/// table. Single-threaded: a solve runs to completion and the field is
/// only read afterwards.
#[derive(Clone, Debug)]
pub struct StepMap {
    /// One step value per cell, `STEP_MAX` = unreached.
    steps: Vec<Step>,
    /// Straight-run edge costs, fixed at construction.
    cost_table: CostTable,
}

impl StepMap {
    /// Create a step map with edge costs derived from `kinematics`
    pub fn new(kinematics: &KinematicsConfig) -> Self {
        Self {
            steps: vec![STEP_MAX; CELL_COUNT],
            cost_table: CostTable::build(kinematics),
        }
    }

    /// Reset every cell to the unreached sentinel
    pub fn reset(&mut self) {
        self.steps.fill(STEP_MAX);
    }

    /// Step value of a cell (`STEP_MAX` outside the field)
    #[inline]
    pub fn step_at(&self, cell: CellCoord) -> Step {
        if cell.is_inside() {
            self.steps[cell.index()]
        } else {
            STEP_MAX
        }
    }

    /// Read-only snapshot of the whole field, dense cell order
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The active cost table
    #[inline]
    pub fn cost_table(&self) -> &CostTable {
        &self.cost_table
    }

    /// Edge cost of the `i`-th consecutive cell of a straight run
    #[inline]
    pub(crate) fn edge_cost(&self, run_length: usize, simple_cost: bool) -> Step {
        if simple_cost {
            run_length as Step
        } else {
            self.cost_table.cost(run_length)
        }
    }

    /// Fill the field from the destination cells outward.
    ///
    /// Label-correcting search over straight runs: each popped cell is
    /// extended in all four cardinals one cell at a time while unobstructed,
    /// accumulating run costs from the table (or plain hop counts with
    /// `simple_cost`). With `known_only`, unknown walls block; otherwise
    /// they are traversed optimistically.
    ///
    /// The search is clipped to the known extent expanded to cover every
    /// destination, padded by one cell on the low side and two on the high
    /// side. Cells beyond that rectangle are never expanded, so a start far
    /// outside it comes back unreachable even if a path exists.
    pub fn solve(
        &mut self,
        maze: &impl MazeView,
        destinations: &[CellCoord],
        known_only: bool,
        simple_cost: bool,
    ) {
        // clip rectangle: known extent, grown to cover the destinations
        let extent = maze.known_extent();
        let mut min_x = extent.min.x as i16;
        let mut min_y = extent.min.y as i16;
        let mut max_x = extent.max.x as i16;
        let mut max_y = extent.max.y as i16;
        for dest in destinations {
            min_x = min_x.min(dest.x as i16);
            min_y = min_y.min(dest.y as i16);
            max_x = max_x.max(dest.x as i16);
            max_y = max_y.max(dest.y as i16);
        }
        min_x -= 1;
        min_y -= 1;
        max_x += 2;
        max_y += 2;

        self.reset();
        debug!(
            "[StepMap] solve: {} destination(s), known_only={}, simple_cost={}, clip=({},{})..({},{})",
            destinations.len(),
            known_only,
            simple_cost,
            min_x,
            min_y,
            max_x,
            max_y
        );

        let mut queue = BinaryHeap::new();
        for &dest in destinations {
            if dest.is_inside() {
                self.steps[dest.index()] = 0;
                queue.push(QueueEntry {
                    cell: dest,
                    step: 0,
                });
            } else {
                trace!("[StepMap] skipping out-of-field destination {dest}");
            }
        }

        while let Some(QueueEntry { cell: focus, step }) = queue.pop() {
            if (focus.x as i16) < min_x
                || (focus.y as i16) < min_y
                || (focus.x as i16) > max_x
                || (focus.y as i16) > max_y
            {
                continue;
            }
            let focus_step = self.steps[focus.index()];
            // stale entry, already improved by another path
            if focus_step < step {
                continue;
            }
            for dir in Direction::CARDINALS {
                // extend a straight run while unobstructed
                let mut next = focus;
                let mut i = 1;
                loop {
                    if maze.is_wall(next, dir) || (known_only && !maze.is_known(next, dir)) {
                        break;
                    }
                    next = next.next(dir);
                    let candidate = focus_step.saturating_add(self.edge_cost(i, simple_cost));
                    let slot = &mut self.steps[next.index()];
                    // run costs are monotonic: once one cell fails to
                    // improve, no deeper cell on this line can
                    if *slot <= candidate {
                        break;
                    }
                    *slot = candidate;
                    queue.push(QueueEntry {
                        cell: next,
                        step: candidate,
                    });
                    i += 1;
                }
            }
        }
    }

    /// Solve for `destinations` and extract the full direction sequence
    /// from `start` to a zero-step cell.
    ///
    /// Returns an empty sequence when no such path is currently known.
    pub fn shortest_directions(
        &mut self,
        maze: &impl MazeView,
        start: CellCoord,
        destinations: &[CellCoord],
        known_only: bool,
        simple_cost: bool,
    ) -> Vec<Direction> {
        self.solve(maze, destinations, known_only, simple_cost);
        let (directions, end) = self.descend(
            maze,
            Pose::new(start, Direction::North),
            known_only,
            simple_cost,
            false,
        );
        if self.step_at(end.cell) == 0 {
            directions
        } else {
            debug!("[StepMap] shortest_directions: start {start} cannot reach a destination");
            Vec::new()
        }
    }

    /// Incremental commitment plan for exploration.
    ///
    /// Descends through known territory only as far as wall knowledge
    /// permits (`break_on_unknown`), then ranks the next single-step options
    /// at the break pose. Requires a previously solved field.
    pub fn next_step_plan(&self, maze: &impl MazeView, start: Pose) -> StepPlan {
        let (known, end) = self.descend(maze, start, false, false, true);
        let candidates = self.next_direction_candidates(maze, end);
        StepPlan {
            known,
            candidates,
            end,
        }
    }
}

impl Default for StepMap {
    fn default() -> Self {
        Self::new(&KinematicsConfig::default())
    }
}
