//! cruxline-core: lattice climbing simulation engine.
//!
//! Two climbers with equal energy budgets race up a discretized wall.
//! The Greedy policy grabs the best hold in reach; the Prudent policy
//! weighs height gain, move efficiency, and a bounded-depth lookahead.
//! The engine is a pure function of (wall, policy, start state) to
//! (trajectory, terminal status): no I/O, no clocks, no platform RNG.
//!
//! RULES:
//!   - The wall never mutates after construction; runs may share it.
//!   - Energy never goes negative: a move is taken only if affordable.
//!   - All randomness (wall texturing only) flows through `rng::WallRng`.
//!   - Two runs with identical inputs produce byte-identical trajectories.

pub mod dynamics;
pub mod error;
pub mod metrics;
pub mod policy;
pub mod rng;
pub mod scenario;
pub mod simulator;
pub mod types;
pub mod wall;

pub use dynamics::State;
pub use error::{SimError, SimResult};
pub use metrics::{compute_metrics, MetricsRecord};
pub use policy::{PolicyKind, PolicyParams};
pub use scenario::{ClimberSpec, Scenario};
pub use simulator::{simulate, SimRun, Simulator, Status};
pub use wall::Wall;
