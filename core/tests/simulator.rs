//! Termination state machine and defensive guards.
//!
//! The three terminal statuses are mutually exclusive and exhaustive
//! for any finite run; the step cap surfaces as an error, never as a
//! status.

use cruxline_core::{
    dynamics::{actions, valid_actions},
    simulate, PolicyKind, SimError, Simulator, State, Status, Wall,
};

fn greedy() -> PolicyKind {
    PolicyKind::Greedy
}

#[test]
fn starting_on_the_anchor_row_is_topped_with_zero_steps() {
    let wall = Wall::new(3, 3, 1.0).expect("wall");
    let run = simulate(&wall, &greedy(), State::new(2, 1, 5.0)).expect("run");
    assert_eq!(run.status, Status::Topped);
    assert_eq!(run.steps, 0);
    assert_eq!(run.trajectory.len(), 1);
    assert_eq!(run.time_to_top, Some(0));
}

#[test]
fn blank_destinations_classify_as_pumped_not_stuck() {
    // 2x2 wall: row 1 fully blank, and the lateral cell blanked too.
    // Geometric successors exist, usable ones do not; rule 3 fires
    // before rule 2.
    let mut wall = Wall::new(2, 2, 0.5).expect("wall");
    wall.set_full_row(1, 0.0);
    wall.set_hold(0, 1, 0.0);

    let start = State::new(0, 0, 5.0);
    assert!(!actions(&wall, 0, 0).is_empty(), "geometric successors exist");
    assert!(valid_actions(&wall, &start).is_empty(), "no usable successor");

    let run = simulate(&wall, &greedy(), start).expect("run");
    assert_eq!(run.status, Status::Pumped);
    assert_eq!(run.trajectory.len(), 1, "no move was taken");
}

#[test]
fn exhausted_energy_classifies_as_pumped() {
    // Cost 2 per move, budget 3: one move up, then nothing affordable.
    let wall = Wall::new(3, 3, 0.5).expect("wall");
    let run = simulate(&wall, &greedy(), State::new(0, 1, 3.0)).expect("run");
    assert_eq!(run.status, Status::Pumped);
    assert_eq!(run.steps, 1);
    assert!((run.final_state().energy - 1.0).abs() < 1e-12);
}

#[test]
fn energy_is_monotonically_decreasing_along_the_trajectory() {
    let wall = Wall::new(10, 5, 0.6).expect("wall");
    let run = simulate(&wall, &greedy(), State::new(0, 2, 40.0)).expect("run");
    for pair in run.trajectory.windows(2) {
        // Every move costs at least 1 (q <= 1), so strict decrease.
        assert!(
            pair[1].energy <= pair[0].energy - 1.0,
            "energy did not decrease: {} -> {}",
            pair[0].energy,
            pair[1].energy
        );
    }
}

#[test]
fn every_transition_is_a_legal_neighbor_move() {
    let wall = Wall::new(10, 5, 0.6).expect("wall");
    let run = simulate(&wall, &greedy(), State::new(0, 2, 40.0)).expect("run");
    for pair in run.trajectory.windows(2) {
        let geo = actions(&wall, pair[0].row, pair[0].col);
        assert!(
            geo.contains(&(pair[1].row, pair[1].col)),
            "illegal transition {:?} -> {:?}",
            pair[0].cell(),
            pair[1].cell()
        );
    }
}

#[test]
fn move_records_mirror_the_trajectory() {
    let wall = Wall::new(6, 4, 0.8).expect("wall");
    let run = simulate(&wall, &greedy(), State::new(0, 1, 30.0)).expect("run");
    assert_eq!(run.moves.len() + 1, run.trajectory.len());
    for (i, rec) in run.moves.iter().enumerate() {
        assert_eq!(rec.step, i as u64);
        assert_eq!(rec.from, run.trajectory[i].cell());
        assert_eq!(rec.to, run.trajectory[i + 1].cell());
        assert!((rec.energy_before - rec.cost - rec.energy_after).abs() < 1e-9);
        assert!(rec.energy_after >= 0.0);
    }
    let total: f64 = run.moves.iter().map(|m| m.cost).sum();
    assert!((total - run.total_cost).abs() < 1e-9);
}

#[test]
fn step_cap_surfaces_as_an_error_not_a_status() {
    let wall = Wall::new(20, 5, 1.0).expect("wall");
    let sim = Simulator::with_step_cap(1);
    let err = sim.run(&wall, &greedy(), State::new(0, 2, 1000.0)).unwrap_err();
    assert!(
        matches!(err, SimError::StepLimitExceeded { limit: 1 }),
        "got {err:?}"
    );
}

#[test]
fn default_step_cap_never_triggers_on_a_normal_run() {
    let wall = Wall::new(20, 5, 1.0).expect("wall");
    let run = simulate(&wall, &greedy(), State::new(0, 2, 1000.0)).expect("run");
    assert_eq!(run.status, Status::Topped);
}

#[test]
fn start_off_the_wall_is_a_configuration_error() {
    let wall = Wall::new(3, 3, 1.0).expect("wall");
    let err = simulate(&wall, &greedy(), State::new(9, 0, 5.0)).unwrap_err();
    assert!(matches!(err, SimError::StartOffWall { .. }), "got {err:?}");

    let err = simulate(&wall, &greedy(), State::new(0, 0, -1.0)).unwrap_err();
    assert!(matches!(err, SimError::StartOffWall { .. }), "got {err:?}");
}

#[test]
fn terminal_status_postconditions_hold() {
    // Across a few budgets and walls: Topped implies top row, Pumped
    // implies no valid action while geometric successors remain.
    for (terrain, budget) in [(1.0, 3.0), (0.5, 7.0), (0.3, 100.0), (0.25, 2.0)] {
        let wall = Wall::new(8, 4, terrain).expect("wall");
        let run = simulate(&wall, &greedy(), State::new(0, 2, budget)).expect("run");
        let last = *run.final_state();
        match run.status {
            Status::Topped => assert_eq!(last.row, wall.height - 1),
            Status::Pumped => {
                assert!(valid_actions(&wall, &last).is_empty());
                assert!(!actions(&wall, last.row, last.col).is_empty());
            }
            Status::Stuck => {
                assert!(actions(&wall, last.row, last.col).is_empty());
            }
            Status::Climbing => panic!("run returned a non-terminal status"),
        }
    }
}
