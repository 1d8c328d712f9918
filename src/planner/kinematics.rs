//! Vehicle kinematics and the straight-run cost table.
//!
//! Edge costs are travel times, not hop counts: a run of N consecutive cells
//! is integrated over a trapezoidal velocity profile (or a triangular one
//! when the run is too short to reach cruise speed), plus a fixed turn time
//! for entering the run. The table is a pure function of the kinematic
//! constants and is computed once at construction.

use serde::{Deserialize, Serialize};

use crate::core::GRID_SIZE;
use crate::error::Result;

/// Per-cell cost value. `STEP_MAX` is the unreached sentinel; all real
/// costs stay strictly below it.
pub type Step = u16;

/// Sentinel meaning "unreached / unbounded".
pub const STEP_MAX: Step = Step::MAX;

/// Number of cost table entries (1-based by run length).
pub const COST_TABLE_LEN: usize = 2 * GRID_SIZE;

fn default_start_speed() -> f32 {
    420.0
}
fn default_max_accel() -> f32 {
    4200.0
}
fn default_cruise_speed() -> f32 {
    1500.0
}
fn default_cell_length() -> f32 {
    90.0
}
fn default_turn_time() -> f32 {
    287.0
}
fn default_cost_divisor() -> u16 {
    2
}

/// Kinematic constants the cost table is derived from.
///
/// Any change requires rebuilding the whole table; entries are never patched
/// individually.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KinematicsConfig {
    /// Speed at the start of a straight run (mm/s).
    /// Default: 420.0
    #[serde(default = "default_start_speed")]
    pub start_speed_mm_s: f32,

    /// Maximum acceleration (mm/s²).
    /// Default: 4200.0
    #[serde(default = "default_max_accel")]
    pub max_accel_mm_s2: f32,

    /// Cruise (saturation) speed (mm/s).
    /// Default: 1500.0
    #[serde(default = "default_cruise_speed")]
    pub cruise_speed_mm_s: f32,

    /// Length of one cell (mm).
    /// Default: 90.0
    #[serde(default = "default_cell_length")]
    pub cell_length_mm: f32,

    /// Time of the 90° turn that starts a run (ms).
    /// Default: 287.0
    #[serde(default = "default_turn_time")]
    pub turn_time_ms: f32,

    /// Divisor scaling all entries so accumulated costs fit the step width.
    /// Default: 2
    #[serde(default = "default_cost_divisor")]
    pub cost_divisor: u16,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            start_speed_mm_s: default_start_speed(),
            max_accel_mm_s2: default_max_accel(),
            cruise_speed_mm_s: default_cruise_speed(),
            cell_length_mm: default_cell_length(),
            turn_time_ms: default_turn_time(),
            cost_divisor: default_cost_divisor(),
        }
    }
}

impl KinematicsConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a TOML string; missing fields fall back to defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Builder-style setter for the start speed.
    pub fn with_start_speed(mut self, mm_s: f32) -> Self {
        self.start_speed_mm_s = mm_s;
        self
    }

    /// Builder-style setter for the cruise speed.
    pub fn with_cruise_speed(mut self, mm_s: f32) -> Self {
        self.cruise_speed_mm_s = mm_s;
        self
    }

    /// Builder-style setter for the turn time.
    pub fn with_turn_time(mut self, ms: f32) -> Self {
        self.turn_time_ms = ms;
        self
    }
}

/// Travel time over `cells` cell-lengths of straight running (ms).
///
/// Integrates the velocity profile by area: triangular while the distance is
/// too short to reach cruise speed, trapezoidal with a cruise plateau
/// otherwise.
fn straight_time_ms(cells: usize, config: &KinematicsConfig) -> f32 {
    let vs = config.start_speed_mm_s;
    let am = config.max_accel_mm_s2;
    let vm = config.cruise_speed_mm_s;
    let d = config.cell_length_mm * cells as f32;
    let d_cruise = (vm * vm - vs * vs) / am;
    if d < d_cruise {
        2.0 * ((vs * vs + am * d).sqrt() - vs) / am * 1000.0
    } else {
        (am * d + (vm - vs) * (vm - vs)) / (am * vm) * 1000.0
    }
}

/// Precomputed cost of an i-cell straight run entered through a 90° turn.
///
/// Indexed by run length (1-based); monotonically non-decreasing; immutable
/// after construction.
#[derive(Clone, Debug)]
pub struct CostTable {
    entries: [Step; COST_TABLE_LEN],
}

impl CostTable {
    /// Build the table from kinematic constants.
    pub fn build(config: &KinematicsConfig) -> Self {
        let mut entries = [0 as Step; COST_TABLE_LEN];
        let divisor = config.cost_divisor.max(1);
        for (i, entry) in entries.iter_mut().enumerate().skip(1) {
            // the first cell of a run is the turn itself
            let ms = config.turn_time_ms + straight_time_ms(i - 1, config);
            *entry = (ms as Step) / divisor;
        }
        Self { entries }
    }

    /// Cost of the `run_length`-th consecutive cell of a straight run.
    ///
    /// Run lengths past the table saturate to the last entry; an in-field
    /// walk never gets there.
    #[inline]
    pub fn cost(&self, run_length: usize) -> Step {
        debug_assert!(run_length >= 1);
        self.entries[run_length.min(COST_TABLE_LEN - 1)]
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::build(&KinematicsConfig::default())
    }
}
