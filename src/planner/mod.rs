//! The planning core: cost model, field solver, path extraction.

mod descent;
mod extension;
mod frontier;
mod kinematics;
mod step_map;

pub use extension::append_straight_directions;
pub use kinematics::{CostTable, KinematicsConfig, Step, COST_TABLE_LEN, STEP_MAX};
pub use step_map::{StepMap, StepPlan};
