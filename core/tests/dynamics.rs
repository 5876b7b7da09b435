//! Action-space and transition invariants.
//!
//! For every reachable state: valid_actions(s) is a subset of the
//! geometric actions, every valid action clears the passable
//! threshold, and every valid action is affordable. Transitions fail
//! fast; energy is never clamped.

use cruxline_core::{
    dynamics::{actions, step, valid_actions, State},
    SimError, Wall,
};

fn open_wall(quality: f64) -> Wall {
    Wall::new(3, 3, quality).expect("3x3 wall")
}

// ── Geometry ─────────────────────────────────────────────────────────────────

#[test]
fn actions_from_center_are_five() {
    let wall = open_wall(1.0);
    let moves = actions(&wall, 1, 1);
    assert_eq!(moves.len(), 5);
    for (r, c) in &moves {
        assert!(*r == 1 || *r == 2, "row delta must be 0 or 1, got row {r}");
        assert!((*c as i64 - 1).abs() <= 1, "col delta must be within 1, got col {c}");
    }
    assert!(!moves.contains(&(1, 1)), "no-op must be excluded");
}

#[test]
fn actions_clip_to_grid_bounds() {
    let wall = open_wall(1.0);
    // Bottom-left corner: right, up, up-right.
    let corner = actions(&wall, 0, 0);
    assert_eq!(corner, vec![(0, 1), (1, 0), (1, 1)]);
    // Top row: lateral only.
    let top = actions(&wall, 2, 1);
    assert_eq!(top, vec![(2, 0), (2, 2)]);
}

#[test]
fn actions_are_purely_geometric() {
    // Blank rock does not shrink the geometric action set.
    let wall = open_wall(0.0);
    assert_eq!(actions(&wall, 0, 0).len(), 3);
}

// ── Validity filter ──────────────────────────────────────────────────────────

#[test]
fn valid_actions_are_a_subset_of_actions() {
    let mut wall = open_wall(0.5);
    wall.set_hold(1, 0, 0.0);
    wall.set_hold(1, 2, 0.05);
    let state = State::new(0, 1, 100.0);
    let geometric = actions(&wall, 0, 1);
    for a in valid_actions(&wall, &state) {
        assert!(geometric.contains(&a), "{a:?} not in geometric set");
    }
}

#[test]
fn passable_threshold_is_inclusive_at_0_08() {
    let mut wall = Wall::new(2, 1, 0.5).expect("2x1 wall");
    wall.set_hold(1, 0, 0.08);
    let state = State::new(0, 0, 100.0);
    assert_eq!(valid_actions(&wall, &state), vec![(1, 0)], "q = 0.08 is passable");

    wall.set_hold(1, 0, 0.07);
    assert!(
        valid_actions(&wall, &state).is_empty(),
        "q below the threshold is not passable"
    );
}

#[test]
fn blank_rock_is_never_passable() {
    let mut wall = Wall::new(2, 1, 0.5).expect("2x1 wall");
    wall.set_hold(1, 0, 0.0);
    // Even an enormous budget cannot afford infinite cost.
    let state = State::new(0, 0, 1e12);
    assert!(valid_actions(&wall, &state).is_empty());
    assert!(wall.cost(1, 0).is_infinite());
}

#[test]
fn affordability_is_checked_against_exact_cost() {
    let mut wall = Wall::new(2, 1, 0.5).expect("2x1 wall");
    wall.set_hold(1, 0, 0.08); // cost 12.5
    let broke = State::new(0, 0, 12.4);
    assert!(valid_actions(&wall, &broke).is_empty());
    let exact = State::new(0, 0, 12.5);
    assert_eq!(valid_actions(&wall, &exact), vec![(1, 0)]);
}

#[test]
fn out_of_bounds_reads_as_blank_not_error() {
    let wall = open_wall(1.0);
    assert_eq!(wall.quality(99, 99), 0.0);
    assert!(wall.cost(99, 0).is_infinite());
}

// ── Transitions ──────────────────────────────────────────────────────────────

#[test]
fn step_deducts_exact_cost() {
    let wall = open_wall(0.5); // cost 2 everywhere
    let state = State::new(0, 1, 10.0);
    let next = step(&wall, &state, (1, 1)).expect("legal move");
    assert_eq!((next.row, next.col), (1, 1));
    assert!((next.energy - 8.0).abs() < 1e-12);
}

#[test]
fn step_rejects_non_adjacent_target() {
    let wall = open_wall(1.0);
    let state = State::new(0, 0, 10.0);
    let err = step(&wall, &state, (2, 2)).unwrap_err();
    assert!(matches!(err, SimError::InvalidAction { .. }), "got {err:?}");
}

#[test]
fn step_rejects_unaffordable_move_instead_of_clamping() {
    let mut wall = open_wall(1.0);
    wall.set_hold(1, 1, 0.1); // cost 10
    let state = State::new(0, 1, 5.0);
    let err = step(&wall, &state, (1, 1)).unwrap_err();
    assert!(matches!(err, SimError::InvalidAction { .. }), "got {err:?}");
}

#[test]
fn wall_rejects_degenerate_dimensions() {
    assert!(matches!(
        Wall::new(1, 5, 0.5),
        Err(SimError::BadDimensions { .. })
    ));
    assert!(matches!(
        Wall::new(5, 0, 0.5),
        Err(SimError::BadDimensions { .. })
    ));
}
