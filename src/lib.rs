//! # Marga-Nav: Step-Map Navigation for Maze-Solving Robots
//!
//! Cost-optimal navigation over a partially-known grid maze, for a vehicle
//! that must commit to motion decisions before exploration is complete.
//!
//! ## Features
//!
//! - **Physical edge costs**: traversing N consecutive cells in one straight
//!   run is costed by a trapezoidal velocity-profile integral of the
//!   vehicle's kinematics, not by N unit hops
//! - **Partial-knowledge search**: unknown walls are treated optimistically
//!   or pessimistically per call, so the same field drives both exploration
//!   and final speed runs
//! - **Incremental commitment**: path extraction can stop at the first cell
//!   whose adjacent walls are still unknown, yielding only moves that later
//!   discoveries cannot invalidate
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::{CellCoord, MazeView, StepMap, WallGrid};
//!
//! // a fully explored, wall-free field
//! let maze = WallGrid::open(CellCoord::new(0, 0));
//! let mut map = StepMap::default();
//!
//! let goals = [CellCoord::new(7, 7)];
//! let directions = map.shortest_directions(&maze, maze.start_cell(), &goals, true, false);
//! assert_eq!(directions.len(), 14);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types ([`CellCoord`], [`Direction`], [`Pose`])
//! - [`maze`]: the grid collaborator: the [`MazeView`] interface the
//!   planner consumes and the [`WallGrid`] wall store behind it
//! - [`planner`]: cost table, field solver, path extraction, frontier
//!   candidates, path extension
//! - [`render`]: diagnostic ASCII dumps of a solved field
//!
//! ## Data Flow
//!
//! ```text
//!   ┌───────────┐   wall / knowledge      ┌──────────────────┐
//!   │ WallGrid  │ ──── queries ─────────► │  StepMap::solve  │
//!   │ (MazeView)│                         │  (field filling) │
//!   └───────────┘                         └────────┬─────────┘
//!         ▲                                        │ per-cell steps
//!         │ replay / commit                        ▼
//!   ┌─────┴──────────┐  directions   ┌─────────────────────────┐
//!   │ vehicle loop   │ ◄──────────── │ descend / candidates /  │
//!   │ (out of scope) │               │ append_straight         │
//!   └────────────────┘               └─────────────────────────┘
//! ```
//!
//! The solve runs to completion on a single control-loop invocation; the
//! field is then read-only for extraction and rendering until the next
//! solve.

pub mod core;
pub mod error;
pub mod maze;
pub mod planner;
pub mod render;

// Re-export main types at crate root
pub use crate::core::{CellCoord, Direction, Pose, RelativeDirection, WallExtent, GRID_SIZE};
pub use error::{MargaError, Result};
pub use maze::{MazeView, WallGrid};
pub use planner::{
    append_straight_directions, CostTable, KinematicsConfig, Step, StepMap, StepPlan, STEP_MAX,
};
pub use render::render_field;
