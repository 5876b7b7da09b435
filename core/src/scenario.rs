//! Built-in route presets: the four test cases, each a hand-set wall
//! plus a matched pair of climbers with equal energy budgets.
//!
//! Case 1, The Pump Clock: an endurance route. The left line starts on
//! jugs and pumps out; the right line is sustained but paced with rest
//! stances. Energy management decides it.
//!
//! Case 2, The Crux Roulette: three crux options at two-thirds height
//! with different risk/reward profiles, merging into one finish.
//!
//! Case 3, The Labyrinth: a maze of holds with dead-end jug ladders,
//! hidden traverses, and one true line. Route-reading decides it.
//!
//! Case 4, The Redpoint Crux: everything leads to one make-or-break
//! sequence with three micro-beta options.

use crate::{
    error::SimResult,
    policy::{PolicyKind, PolicyParams},
    wall::{
        RouteFeature, Wall, HOLD_BAD_CRIMP, HOLD_BAD_SLOPER, HOLD_BLANK, HOLD_BUCKET, HOLD_CRIMP,
        HOLD_DESPERATE, HOLD_GOOD_JUG, HOLD_JUG, HOLD_LEDGE, HOLD_PINCH, HOLD_POCKET, HOLD_RAIL,
        HOLD_SLOPER, TERRAIN_VERTICAL,
    },
};
use serde::{Deserialize, Serialize};

/// A named climber configuration: energy budget plus policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimberSpec {
    pub name:   String,
    pub energy: f64,
    #[serde(flatten)]
    pub policy: PolicyKind,
}

impl ClimberSpec {
    pub fn greedy(energy: f64) -> Self {
        Self {
            name: "Greedy".to_string(),
            energy,
            policy: PolicyKind::Greedy,
        }
    }

    pub fn prudent(energy: f64, alpha: f64, beta: f64, lookahead: u32) -> Self {
        Self {
            name: "Prudent".to_string(),
            energy,
            policy: PolicyKind::Prudent(PolicyParams { alpha, beta, lookahead }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    PumpClock,
    CruxRoulette,
    Labyrinth,
    RedpointCrux,
}

impl Scenario {
    pub fn all() -> [Scenario; 4] {
        [
            Self::PumpClock,
            Self::CruxRoulette,
            Self::Labyrinth,
            Self::RedpointCrux,
        ]
    }

    /// Accepts both the caseN selectors and the snake_case names.
    pub fn from_name(name: &str) -> Option<Scenario> {
        match name {
            "case1" | "pump_clock" => Some(Self::PumpClock),
            "case2" | "crux_roulette" => Some(Self::CruxRoulette),
            "case3" | "labyrinth" => Some(Self::Labyrinth),
            "case4" | "redpoint_crux" => Some(Self::RedpointCrux),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PumpClock => "The Pump Clock",
            Self::CruxRoulette => "The Crux Roulette",
            Self::Labyrinth => "The Labyrinth",
            Self::RedpointCrux => "The Redpoint Crux",
        }
    }

    pub fn grade(&self) -> &'static str {
        match self {
            Self::PumpClock => "5.11c",
            Self::CruxRoulette => "5.12a",
            Self::Labyrinth => "5.11b",
            Self::RedpointCrux => "5.12b",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::PumpClock => "pump_clock",
            Self::CruxRoulette => "crux_roulette",
            Self::Labyrinth => "labyrinth",
            Self::RedpointCrux => "redpoint_crux",
        }
    }

    /// The matched climber pair for this case. Budgets are equal, so
    /// strategy alone determines the outcome.
    pub fn default_climbers(&self) -> Vec<ClimberSpec> {
        match self {
            Self::PumpClock => vec![
                ClimberSpec::greedy(150.0),
                ClimberSpec::prudent(150.0, 0.6, 0.4, 5),
            ],
            Self::CruxRoulette => vec![
                ClimberSpec::greedy(130.0),
                ClimberSpec::prudent(130.0, 0.5, 0.5, 6),
            ],
            Self::Labyrinth => vec![
                ClimberSpec::greedy(200.0),
                ClimberSpec::prudent(200.0, 0.4, 0.6, 6),
            ],
            Self::RedpointCrux => vec![
                ClimberSpec::greedy(100.0),
                ClimberSpec::prudent(100.0, 0.4, 0.5, 5),
            ],
        }
    }

    pub fn build(&self) -> SimResult<Wall> {
        match self {
            Self::PumpClock => pump_clock(),
            Self::CruxRoulette => crux_roulette(),
            Self::Labyrinth => labyrinth(),
            Self::RedpointCrux => redpoint_crux(),
        }
    }
}

fn pump_clock() -> SimResult<Wall> {
    let mut wall = Wall::new(40, 20, TERRAIN_VERTICAL)?;
    wall.name = "The Pump Clock".to_string();
    wall.description = "40m endurance route. Left line starts easy but pumps out. \
                        Right line is sustained but paced. Who manages energy better?"
        .to_string();
    wall.grade = "5.11c".to_string();

    // Left line, "The Sprint" (cols 3-6).
    wall.add_feature(RouteFeature {
        name:        "Warm-up Jugs".to_string(),
        row_start:   0,
        row_end:     12,
        col_start:   3,
        col_end:     7,
        quality:     HOLD_BUCKET,
        description: "Big positive holds - too good to be true".to_string(),
    });
    // The Pump Zone: holds get worse as fatigue builds.
    for r in 12..20 {
        let decay = 0.8 - (r - 12) as f64 * 0.05;
        wall.set_row(r, decay, 3, 7);
    }
    wall.add_feature(RouteFeature {
        name:        "The Dead Point".to_string(),
        row_start:   20,
        row_end:     26,
        col_start:   3,
        col_end:     7,
        quality:     HOLD_BAD_SLOPER,
        description: "Desperate slopers on tired arms".to_string(),
    });
    // The Traverse of Desperation: blank band forces a rightward escape.
    wall.set_row(25, HOLD_BLANK, 3, 10);
    wall.set_row(26, HOLD_CRIMP, 6, 14);
    // Final headwall.
    wall.set_region(32, 40, 10, 15, HOLD_CRIMP);

    // Right line, "The Pacemaker" (cols 13-17): consistent moderate
    // terrain with a rest stance every 8 moves.
    for r in 0..40 {
        wall.set_row(r, HOLD_PINCH, 13, 18);
        if r % 8 == 7 {
            wall.set_hold(r, 15, HOLD_GOOD_JUG);
        }
    }
    wall.set_region(35, 40, 13, 18, HOLD_RAIL);

    // Start ledge, summit anchors, early cross-route.
    wall.set_full_row(0, HOLD_LEDGE);
    wall.set_full_row(39, HOLD_JUG);
    wall.set_row(10, HOLD_RAIL, 6, 14);

    wall.start_positions = vec![(0, 5), (0, 15)];
    Ok(wall)
}

fn crux_roulette() -> SimResult<Wall> {
    let mut wall = Wall::new(40, 20, TERRAIN_VERTICAL)?;
    wall.name = "The Crux Roulette".to_string();
    wall.description = "Three crux options: The Dyno (one hard move), The Tech Fest \
                        (sustained technical), The Sandbag (looks easy, isn't). Choose wisely."
        .to_string();
    wall.grade = "5.12a".to_string();

    // Approach: three parallel lines of similar difficulty.
    wall.set_region(0, 20, 2, 6, HOLD_RAIL);
    wall.set_region(0, 20, 8, 12, HOLD_RAIL);
    wall.set_region(0, 20, 14, 18, HOLD_RAIL);

    // Blank band forces a crux choice.
    wall.set_full_row(20, HOLD_BLANK);

    // Left: The Dyno: one desperate move, easy after.
    wall.set_hold(20, 4, HOLD_DESPERATE);
    wall.set_region(21, 28, 2, 6, HOLD_BUCKET);

    // Center: The Tech Fest: sustained technical crimping.
    for r in 20..26 {
        wall.set_hold(r, 10, HOLD_BAD_CRIMP);
    }
    wall.set_region(26, 28, 8, 12, HOLD_RAIL);

    // Right: The Sandbag: looks like rails, climbs like slopers.
    for r in 20..28 {
        wall.set_hold(r, 16, HOLD_SLOPER);
    }

    // Merge and finish.
    wall.set_region(28, 32, 6, 14, HOLD_LEDGE);
    wall.set_region(32, 40, 8, 12, HOLD_PINCH);
    wall.set_full_row(39, HOLD_JUG);

    // Rest jugs before each crux.
    wall.set_hold(19, 4, HOLD_JUG);
    wall.set_hold(19, 10, HOLD_JUG);
    wall.set_hold(19, 16, HOLD_JUG);

    wall.start_positions = vec![(0, 10)];
    Ok(wall)
}

fn labyrinth() -> SimResult<Wall> {
    let mut wall = Wall::new(40, 20, HOLD_BLANK)?;
    wall.name = "The Labyrinth".to_string();
    wall.description = "A maze of holds with dead ends, hidden traverses, and one true line. \
                        Route-reading matters as much as strength."
        .to_string();
    wall.grade = "5.11b".to_string();

    // Start area: wide ledge.
    wall.set_region(0, 3, 0, 20, HOLD_LEDGE);

    // Trap 1: the jug ladder to nowhere (left side).
    let mut r = 3;
    while r < 18 {
        wall.set_hold(r, 3, HOLD_JUG);
        r += 2;
    }
    wall.set_hold(18, 3, HOLD_BLANK); // dead end

    // Trap 2: the easy ramp into a roof.
    for i in 0..12 {
        wall.set_hold(3 + i, 6 + i / 2, HOLD_RAIL);
    }
    wall.set_region(15, 17, 8, 14, HOLD_BLANK);

    // The true path: traverse right, up the right side, back left
    // under the roof, through a hidden pocket line into the dihedral.
    wall.set_region(3, 6, 10, 18, HOLD_CRIMP);
    wall.set_region(6, 15, 16, 19, HOLD_PINCH);
    wall.set_row(15, HOLD_CRIMP, 8, 17);
    wall.add_hold_line(
        &[(16, 8), (17, 8), (18, 7), (19, 7), (20, 8), (21, 9), (22, 10)],
        HOLD_POCKET,
    );
    wall.set_region(22, 32, 9, 13, HOLD_RAIL);

    // Trap 3: false summit capped by a roof.
    wall.set_region(28, 34, 4, 8, HOLD_BUCKET);
    wall.set_region(34, 36, 4, 8, HOLD_BLANK);

    // True finish: exit traverse into the final corner.
    wall.set_row(32, HOLD_PINCH, 12, 18);
    wall.set_region(32, 40, 15, 18, HOLD_LEDGE);
    wall.set_row(39, HOLD_JUG, 14, 19);

    // Rest stances: rewards for route-finding.
    wall.set_hold(14, 17, HOLD_JUG);
    wall.set_hold(22, 11, HOLD_JUG);
    wall.set_hold(32, 16, HOLD_JUG);

    wall.start_positions = vec![(1, 10)];
    Ok(wall)
}

fn redpoint_crux() -> SimResult<Wall> {
    let mut wall = Wall::new(40, 20, TERRAIN_VERTICAL)?;
    wall.name = "The Redpoint Crux".to_string();
    wall.description = "Classic testpiece. Everything leads to THE sequence at 2/3 height. \
                        Save enough gas for the crux, then pick your micro-beta."
        .to_string();
    wall.grade = "5.12b".to_string();

    // Warm-up: pump line left, cruise line right.
    wall.set_region(0, 18, 3, 8, HOLD_BUCKET);
    wall.set_region(0, 18, 12, 18, HOLD_PINCH);
    let mut r = 5;
    while r < 18 {
        wall.set_hold(r, 15, HOLD_RAIL);
        r += 4;
    }
    // Central scramble of variable quality.
    for r in 0..18 {
        let q = if r % 3 == 0 { HOLD_RAIL } else { HOLD_CRIMP };
        wall.set_hold(r, 10, q);
    }

    // Pre-crux rest.
    wall.add_feature(RouteFeature {
        name:        "The Shake-out".to_string(),
        row_start:   18,
        row_end:     21,
        col_start:   6,
        col_end:     14,
        quality:     HOLD_JUG,
        description: "Last rest before the business".to_string(),
    });

    // The crux: blank band with three micro-beta options.
    wall.set_full_row(21, HOLD_BLANK);
    // Left beta: two desperate moves, easy after.
    wall.set_hold(21, 5, HOLD_DESPERATE);
    wall.set_hold(22, 5, HOLD_BAD_SLOPER);
    wall.set_region(23, 27, 4, 7, HOLD_BUCKET);
    // Center beta: three hard crimps.
    wall.set_hold(21, 10, HOLD_BAD_CRIMP);
    wall.set_hold(22, 10, HOLD_BAD_CRIMP);
    wall.set_hold(23, 10, HOLD_BAD_CRIMP);
    wall.set_region(24, 27, 9, 12, HOLD_RAIL);
    // Right beta: four sustained moves, lower risk, higher total cost.
    for r in 21..25 {
        wall.set_hold(r, 15, HOLD_CRIMP);
    }
    wall.set_region(25, 27, 14, 17, HOLD_PINCH);

    // Recovery and cruise to the anchors.
    wall.set_region(27, 30, 8, 14, HOLD_RAIL);
    wall.set_region(30, 40, 8, 14, HOLD_LEDGE);
    wall.set_full_row(39, HOLD_JUG);
    wall.set_hold(27, 11, HOLD_JUG);
    wall.set_hold(35, 11, HOLD_JUG);

    wall.start_positions = vec![(0, 10)];
    Ok(wall)
}
