//! Shared primitive types used across the entire simulation.

/// A simulation step. One step = one move decision.
pub type Step = u64;

/// Climber energy. Strictly non-negative once a run is underway.
pub type Energy = f64;

/// A wall cell as (row, col). Row 0 is the ground, row height-1 the anchors.
pub type Cell = (usize, usize);
