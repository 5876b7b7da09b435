//! Scalar summaries of a completed trajectory. Pure functions: calling
//! them twice on the same inputs yields identical records.

use crate::{dynamics::State, types::Step, wall::Wall};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub final_height:      usize,
    pub max_height:        usize,
    /// r_final / (H - 1).
    pub height_efficiency: f64,
    /// r_final / energy spent. When no energy was spent (the climber
    /// never moved) this is defined as r_final, the limit of a free
    /// ascent to the start row.
    pub energy_efficiency: f64,
    pub initial_energy:    f64,
    pub final_energy:      f64,
    pub energy_used:       f64,
    pub success:           bool,
    /// Trajectory length T + 1, counting s0.
    pub path_length:       usize,
    /// Steps to the anchors; only present on success.
    pub time_to_top:       Option<Step>,
}

/// Derive summary statistics from a trajectory. The trajectory must be
/// non-empty (every run records at least s0).
pub fn compute_metrics(wall: &Wall, trajectory: &[State]) -> MetricsRecord {
    assert!(!trajectory.is_empty(), "trajectory must hold at least s0");

    let first = trajectory[0];
    let last = trajectory[trajectory.len() - 1];
    let max_height = wall.height - 1;
    let energy_used = first.energy - last.energy;
    let success = last.row == max_height;

    let energy_efficiency = if energy_used > 0.0 {
        last.row as f64 / energy_used
    } else {
        last.row as f64
    };

    MetricsRecord {
        final_height: last.row,
        max_height,
        height_efficiency: last.row as f64 / max_height as f64,
        energy_efficiency,
        initial_energy: first.energy,
        final_energy: last.energy,
        energy_used,
        success,
        path_length: trajectory.len(),
        time_to_top: success.then_some((trajectory.len() - 1) as Step),
    }
}
