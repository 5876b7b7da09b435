//! Movement model: action space, validity filter, and state transition.
//!
//! Standard climbing movement is 8-connected, upward or lateral only:
//! from (r, c) a climber may reach r' in {r, r+1}, c' in {c-1, c, c+1},
//! excluding the no-op. Downclimbing is not modeled.
//!
//! Two layers of filtering:
//!   - `actions` is purely geometric (grid bounds only);
//!   - `valid_actions` additionally requires a passable hold and an
//!     affordable cost.
//! The distinction matters for terminal classification: a climber with
//! geometric successors but no valid ones is pumped, not stuck.

use crate::{
    error::{SimError, SimResult},
    types::Cell,
    wall::Wall,
};
use serde::{Deserialize, Serialize};

/// A climber's instantaneous state. Energy is non-negative by
/// construction: transitions are refused rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub row:    usize,
    pub col:    usize,
    pub energy: f64,
}

impl State {
    pub fn new(row: usize, col: usize, energy: f64) -> Self {
        Self { row, col, energy }
    }

    pub fn cell(&self) -> Cell {
        (self.row, self.col)
    }
}

/// Geometric successor set of (row, col), intersected with grid bounds.
/// Generated in a fixed order (lateral row first, then the row above,
/// left to right) so downstream iteration is deterministic.
pub fn actions(wall: &Wall, row: usize, col: usize) -> Vec<Cell> {
    let mut moves = Vec::with_capacity(5);
    for dr in 0..=1usize {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let nr = row + dr;
            let nc = col as i64 + dc;
            if nr < wall.height && nc >= 0 && (nc as usize) < wall.width {
                moves.push((nr, nc as usize));
            }
        }
    }
    moves
}

/// Actions the climber can actually take: passable hold and affordable
/// cost. Blank rock is excluded here regardless of energy, and an
/// infinite cost never passes the affordability check.
pub fn valid_actions(wall: &Wall, state: &State) -> Vec<Cell> {
    actions(wall, state.row, state.col)
        .into_iter()
        .filter(|&(r, c)| wall.is_passable(r, c) && wall.cost(r, c) <= state.energy)
        .collect()
}

/// Take one move. Fails fast if the target is not a valid action;
/// the engine never silently clamps energy or teleports.
pub fn step(wall: &Wall, state: &State, target: Cell) -> SimResult<State> {
    if !valid_actions(wall, state).contains(&target) {
        return Err(SimError::InvalidAction {
            from: state.cell(),
            to:   target,
        });
    }
    let (row, col) = target;
    Ok(State {
        row,
        col,
        energy: state.energy - wall.cost(row, col),
    })
}
