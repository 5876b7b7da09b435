//! Decision policies.
//!
//! GREEDY ("the gym bro"): always grab the best hold in reach.
//! Fast, but follows jugs into dead ends and burns energy early.
//!
//! PRUDENT ("the tactician"): weighs height gain, move efficiency,
//! and a bounded-depth lookahead that projects how high a line can
//! still go. May take a harder move now to save the route later.
//!
//! Both are pure functions of (wall, state): nothing is retained
//! between calls, and ties resolve through one documented rule chain
//! so repeated runs are byte-identical.

use crate::{
    dynamics::{valid_actions, State},
    error::{SimError, SimResult},
    types::Cell,
    wall::Wall,
};
use serde::{Deserialize, Serialize};

/// Two utilities within this distance count as exactly tied and fall
/// through to the positional tie-break.
pub const UTILITY_EPS: f64 = 1e-9;

/// Prudent policy weights and search depth.
///
/// `alpha` blends height gain against move efficiency; `beta` blends
/// that immediate score against the lookahead. Both live in [0, 1].
/// `lookahead` is the recursion depth, at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyParams {
    pub alpha:     f64,
    pub beta:      f64,
    pub lookahead: u32,
}

impl PolicyParams {
    /// Validated construction. Rejects out-of-range weights (NaN
    /// included) and a zero depth up front, never mid-simulation.
    pub fn new(alpha: f64, beta: f64, lookahead: u32) -> SimResult<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(SimError::WeightOutOfRange { name: "alpha", value: alpha });
        }
        if !(0.0..=1.0).contains(&beta) {
            return Err(SimError::WeightOutOfRange { name: "beta", value: beta });
        }
        if lookahead == 0 {
            return Err(SimError::ZeroLookahead);
        }
        Ok(Self { alpha, beta, lookahead })
    }
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self { alpha: 0.5, beta: 0.3, lookahead: 5 }
    }
}

/// The closed two-policy set, dispatched by match: no trait objects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PolicyKind {
    Greedy,
    Prudent(PolicyParams),
}

impl PolicyKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Prudent(_) => "prudent",
        }
    }
}

/// Pick the next move, or None when no valid action exists (the
/// simulator classifies that as pumped or stuck).
pub fn decide(wall: &Wall, state: &State, policy: &PolicyKind) -> Option<Cell> {
    let candidates = valid_actions(wall, state);
    if candidates.is_empty() {
        return None;
    }
    let choice = match policy {
        PolicyKind::Greedy => {
            // Exact equality is meaningful here: hold qualities come
            // from a fixed constant vocabulary.
            pick_best(state, &candidates, |(r, c)| wall.quality(r, c), 0.0)
        }
        PolicyKind::Prudent(params) => pick_best(
            state,
            &candidates,
            |target| utility(wall, state, target, params),
            UTILITY_EPS,
        ),
    };
    Some(choice)
}

/// Argmax with the documented tie-break chain: prefer the higher row,
/// then the smaller lateral displacement, then the lower column.
fn pick_best<F>(state: &State, candidates: &[Cell], score: F, eps: f64) -> Cell
where
    F: Fn(Cell) -> f64,
{
    let mut best = candidates[0];
    let mut best_score = score(best);
    for &cand in &candidates[1..] {
        let s = score(cand);
        if s > best_score + eps {
            best = cand;
            best_score = s;
        } else if (s - best_score).abs() <= eps && outranks(state, cand, best) {
            best = cand;
            best_score = best_score.max(s);
        }
    }
    best
}

fn outranks(state: &State, challenger: Cell, incumbent: Cell) -> bool {
    use std::cmp::Reverse;
    let lateral = |cell: Cell| (cell.1 as i64 - state.col as i64).unsigned_abs();
    (challenger.0, Reverse(lateral(challenger)), Reverse(challenger.1))
        > (incumbent.0, Reverse(lateral(incumbent)), Reverse(incumbent.1))
}

/// Prudent utility U(a) = (1-beta) * [alpha*H + (1-alpha)*eps] + beta*F.
///
/// H normalizes the two possible row deltas {0, 1} to {0.5, 1.0};
/// the efficiency term 1/(1+cost) is strictly decreasing in cost and
/// bounded in (0, 1). With beta = 0 the recursion is skipped entirely.
fn utility(wall: &Wall, state: &State, target: Cell, params: &PolicyParams) -> f64 {
    let (row, col) = target;
    let cost = wall.cost(row, col);
    let height_gain = (row - state.row + 1) as f64 / 2.0;
    let efficiency = 1.0 / (1.0 + cost);
    let immediate = params.alpha * height_gain + (1.0 - params.alpha) * efficiency;
    let future = if params.beta > 0.0 {
        lookahead(wall, State::new(row, col, state.energy - cost), params.lookahead)
    } else {
        0.0
    };
    (1.0 - params.beta) * immediate + params.beta * future
}

/// Recursive lookahead F: the best fractional height r/H reachable
/// within `depth` more moves. A branch with no valid continuation
/// evaluates at its own height: dead ends score what they reached,
/// never an artificial sentinel, so they lose to branches that keep
/// the height term growing.
///
/// Exponential in depth (branching factor <= 5); at the reference
/// scale (depth <= 6, 40x20 grids) this needs no memoization.
fn lookahead(wall: &Wall, state: State, depth: u32) -> f64 {
    let here = state.row as f64 / wall.height as f64;
    if depth == 0 {
        return here;
    }
    let next = valid_actions(wall, &state);
    if next.is_empty() {
        return here;
    }
    next.into_iter()
        .map(|(r, c)| {
            let remaining = state.energy - wall.cost(r, c);
            lookahead(wall, State::new(r, c, remaining), depth - 1)
        })
        .fold(0.0, f64::max)
}
