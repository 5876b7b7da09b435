//! The simulation driver: one climber, one wall, one policy.
//!
//! TERMINATION ORDER (fixed, evaluated at the start of every step):
//!   1. At the anchor row          -> Topped
//!   2. No geometric successors    -> Stuck  (degenerate-grid guard)
//!   3. No valid actions           -> Pumped
//!   4. Otherwise decide and move, then re-evaluate.
//!
//! Rule 3 before rule 2 is deliberate: a climber surrounded by blank
//! rock has geometric successors but nothing usable, and that is a
//! pumped-off ending, not a stuck one.
//!
//! A defensive step cap bounds every run. It cannot trigger under the
//! shipped policies (every move costs at least 1 energy), but a
//! pathological policy must surface as an error, never an infinite loop.

use crate::{
    dynamics::{self, State},
    error::{SimError, SimResult},
    policy::{self, PolicyKind},
    types::{Cell, Step},
    wall::Wall,
};
use serde::{Deserialize, Serialize};

/// Step cap multiplier: a run may take at most height * width * this
/// many moves before it is declared runaway.
const STEP_CAP_FACTOR: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Climbing,
    Topped,
    Stuck,
    Pumped,
}

impl Status {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Climbing)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Climbing => "Climbing",
            Self::Topped => "Topped Out",
            Self::Stuck => "Stuck",
            Self::Pumped => "Pumped Off",
        }
    }
}

/// Per-move diagnostics, one record per transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRecord {
    pub step:          Step,
    pub from:          Cell,
    pub to:            Cell,
    pub cost:          f64,
    pub energy_before: f64,
    pub energy_after:  f64,
    pub height_gain:   i64,
    /// -1 = left, 0 = straight, 1 = right.
    pub lateral:       i8,
}

/// A completed run: the trajectory from s0 to the terminal state,
/// immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimRun {
    pub trajectory:  Vec<State>,
    pub moves:       Vec<MoveRecord>,
    pub status:      Status,
    pub steps:       Step,
    pub total_cost:  f64,
    pub time_to_top: Option<Step>,
}

impl SimRun {
    pub fn final_state(&self) -> &State {
        self.trajectory.last().expect("trajectory holds at least s0")
    }
}

/// Drives one climber until a terminal status is reached.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    step_cap: Option<u64>,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the defensive step cap. Mostly for tests.
    pub fn with_step_cap(cap: u64) -> Self {
        Self { step_cap: Some(cap) }
    }

    pub fn run(&self, wall: &Wall, policy: &PolicyKind, start: State) -> SimResult<SimRun> {
        if !wall.is_on_wall(start.row, start.col) || !(start.energy >= 0.0) {
            return Err(SimError::StartOffWall {
                row:    start.row,
                col:    start.col,
                energy: start.energy,
            });
        }

        let cap = self
            .step_cap
            .unwrap_or((wall.height * wall.width) as u64 * STEP_CAP_FACTOR);

        let mut state = start;
        let mut trajectory = vec![state];
        let mut moves: Vec<MoveRecord> = Vec::new();
        let mut total_cost = 0.0;
        let mut steps: Step = 0;

        let status = loop {
            if wall.is_summit(state.row) {
                break Status::Topped;
            }
            if dynamics::actions(wall, state.row, state.col).is_empty() {
                break Status::Stuck;
            }
            let Some(target) = policy::decide(wall, &state, policy) else {
                break Status::Pumped;
            };

            if steps >= cap {
                return Err(SimError::StepLimitExceeded { limit: cap });
            }

            let next = dynamics::step(wall, &state, target)?;
            let cost = state.energy - next.energy;
            moves.push(MoveRecord {
                step:          steps,
                from:          state.cell(),
                to:            target,
                cost,
                energy_before: state.energy,
                energy_after:  next.energy,
                height_gain:   next.row as i64 - state.row as i64,
                lateral:       (next.col as i64 - state.col as i64).signum() as i8,
            });
            total_cost += cost;
            steps += 1;

            log::debug!(
                "step={steps} {:?} -> {:?} cost={cost:.2} energy={:.2}",
                state.cell(),
                target,
                next.energy
            );

            state = next;
            trajectory.push(state);
        };

        let time_to_top = (status == Status::Topped).then_some(steps);
        log::info!(
            "run finished: status={} height={}/{} steps={steps} energy_left={:.2}",
            status.label(),
            state.row,
            wall.height - 1,
            state.energy
        );

        Ok(SimRun {
            trajectory,
            moves,
            status,
            steps,
            total_cost,
            time_to_top,
        })
    }
}

/// One-shot convenience entry point with the default step cap.
pub fn simulate(wall: &Wall, policy: &PolicyKind, start: State) -> SimResult<SimRun> {
    Simulator::new().run(wall, policy, start)
}
