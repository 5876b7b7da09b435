//! The climbing wall: an immutable H x W grid of hold qualities.
//!
//! Each cell holds a quality value q in [0, 1]:
//!   - q = 0: blank rock (impassable)
//!   - q in (0, 0.15]: desperate moves
//!   - q in (0.15, 0.3]: hard crimps and slopers
//!   - q in (0.3, 0.5]: moderate holds
//!   - q in (0.5, 0.8]: good holds
//!   - q in (0.8, 1.0]: jugs and rests
//!
//! Cost model: C = 1/q, so a jug costs 1 and a sloper costs 5.
//! Row 0 is the ground, row height-1 is the anchors.
//!
//! A `Wall` is built up with the setter methods, then treated as
//! read-only for the lifetime of every simulation run that borrows it.

use crate::{
    error::{SimError, SimResult},
    rng::WallRng,
    types::Cell,
};
use serde::{Deserialize, Serialize};

// Hold quality constants (climbing terminology).
pub const HOLD_JUG: f64 = 1.0; // "thank god" hold
pub const HOLD_GOOD_JUG: f64 = 0.9;
pub const HOLD_BUCKET: f64 = 0.8;
pub const HOLD_RAIL: f64 = 0.6;
pub const HOLD_LEDGE: f64 = 0.55;
pub const HOLD_POCKET: f64 = 0.5;
pub const HOLD_PINCH: f64 = 0.4;
pub const HOLD_CRIMP: f64 = 0.3;
pub const HOLD_BAD_CRIMP: f64 = 0.25;
pub const HOLD_SLOPER: f64 = 0.2;
pub const HOLD_BAD_SLOPER: f64 = 0.15;
pub const HOLD_DESPERATE: f64 = 0.12;
pub const HOLD_BLANK: f64 = 0.0;

// Base terrain quality by wall angle.
pub const TERRAIN_SLAB: f64 = 0.45;
pub const TERRAIN_VERTICAL: f64 = 0.35;
pub const TERRAIN_OVERHANG: f64 = 0.25;
pub const TERRAIN_STEEP: f64 = 0.2;
pub const TERRAIN_ROOF: f64 = 0.15;

/// Minimum quality a hold needs to be usable. Inclusive: exactly 0.08
/// is passable. Blank rock (q = 0) is never passable.
pub const PASSABLE_THRESHOLD: f64 = 0.08;

/// A named feature on the wall (crux, rest stance, traverse, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteFeature {
    pub name:        String,
    pub row_start:   usize,
    pub row_end:     usize,
    pub col_start:   usize,
    pub col_end:     usize,
    pub quality:     f64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wall {
    pub height:          usize,
    pub width:           usize,
    grid:                Vec<f64>, // row-major, height * width
    pub name:            String,
    pub description:     String,
    pub grade:           String,
    pub start_positions: Vec<Cell>,
    pub features:        Vec<RouteFeature>,
}

impl Wall {
    /// Blank-slate wall filled with `base_terrain` quality.
    /// Fails fast on degenerate dimensions: a route needs at least
    /// a ground row and an anchor row.
    pub fn new(height: usize, width: usize, base_terrain: f64) -> SimResult<Self> {
        if height < 2 || width < 1 {
            return Err(SimError::BadDimensions { height, width });
        }
        Ok(Self {
            height,
            width,
            grid: vec![base_terrain.clamp(0.0, 1.0); height * width],
            name: "Custom Wall".to_string(),
            description: String::new(),
            grade: "5.10".to_string(),
            start_positions: vec![(0, width / 2)],
            features: Vec::new(),
        })
    }

    /// Seeded procedural wall: base terrain with deterministic quality
    /// jitter. Same seed produces the same wall, byte for byte.
    pub fn textured(height: usize, width: usize, base_terrain: f64, seed: u64) -> SimResult<Self> {
        let mut wall = Self::new(height, width, base_terrain)?;
        let mut rng = WallRng::new(seed);
        for r in 0..height {
            for c in 0..width {
                let q = base_terrain + rng.jitter(0.25);
                wall.set_hold(r, c, q);
            }
        }
        // Ground ledge and anchor jugs so the route is startable and finishable.
        wall.set_row(0, HOLD_LEDGE, 0, width);
        wall.set_row(height - 1, HOLD_JUG, 0, width);
        wall.name = format!("Textured {height}x{width} (seed {seed})");
        Ok(wall)
    }

    // ── Setters ──────────────────────────────────────────────────────────────

    /// Place a single hold. Out-of-bounds writes are ignored; quality
    /// clamps to [0, 1].
    pub fn set_hold(&mut self, row: usize, col: usize, quality: f64) {
        if row < self.height && col < self.width {
            self.grid[row * self.width + col] = quality.clamp(0.0, 1.0);
        }
    }

    /// Set quality for the half-open region [r1, r2) x [c1, c2),
    /// clipped to the grid.
    pub fn set_region(&mut self, r1: usize, r2: usize, c1: usize, c2: usize, quality: f64) {
        let r2 = r2.min(self.height);
        let c2 = c2.min(self.width);
        for r in r1..r2 {
            for c in c1..c2 {
                self.grid[r * self.width + c] = quality.clamp(0.0, 1.0);
            }
        }
    }

    pub fn set_row(&mut self, row: usize, quality: f64, c1: usize, c2: usize) {
        self.set_region(row, row + 1, c1, c2, quality);
    }

    pub fn set_full_row(&mut self, row: usize, quality: f64) {
        self.set_row(row, quality, 0, self.width);
    }

    pub fn set_column(&mut self, col: usize, quality: f64, r1: usize, r2: usize) {
        self.set_region(r1, r2, col, col + 1, quality);
    }

    /// Add a line of holds at specific positions.
    pub fn add_hold_line(&mut self, positions: &[Cell], quality: f64) {
        for &(r, c) in positions {
            self.set_hold(r, c, quality);
        }
    }

    /// Evenly spaced jugs up a column: rows r1, r1+spacing, ... below r2.
    pub fn add_jug_ladder(&mut self, col: usize, r1: usize, r2: usize, spacing: usize) {
        let mut r = r1;
        while r < r2 {
            self.set_hold(r, col, HOLD_JUG);
            r += spacing.max(1);
        }
    }

    /// Impassable blank rock over a region.
    pub fn add_blank_section(&mut self, r1: usize, r2: usize, c1: usize, c2: usize) {
        self.set_region(r1, r2, c1, c2, HOLD_BLANK);
    }

    /// Stamp a named feature onto the grid and record it.
    pub fn add_feature(&mut self, feature: RouteFeature) {
        self.set_region(
            feature.row_start,
            feature.row_end,
            feature.col_start,
            feature.col_end,
            feature.quality,
        );
        self.features.push(feature);
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    /// Hold quality at a position. Cells outside the grid read as
    /// quality 0 (impassable), never an error: boundary moves are
    /// filtered out naturally instead of raising.
    pub fn quality(&self, row: usize, col: usize) -> f64 {
        if row < self.height && col < self.width {
            self.grid[row * self.width + col]
        } else {
            0.0
        }
    }

    /// Energy cost to use a hold: 1/q, infinite for blank rock.
    /// Infinite cost compares as unaffordable against any finite
    /// energy, including zero.
    pub fn cost(&self, row: usize, col: usize) -> f64 {
        let q = self.quality(row, col);
        if q > 0.0 {
            1.0 / q
        } else {
            f64::INFINITY
        }
    }

    /// Whether the hold is usable: at or above the passable threshold.
    pub fn is_passable(&self, row: usize, col: usize) -> bool {
        let q = self.quality(row, col);
        q > 0.0 && q >= PASSABLE_THRESHOLD
    }

    pub fn is_on_wall(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// At the anchors?
    pub fn is_summit(&self, row: usize) -> bool {
        row >= self.height - 1
    }

    /// Mean cost of the passable holds per row; infinite where a row
    /// is entirely blank. Used for route summaries.
    pub fn difficulty_profile(&self) -> Vec<f64> {
        (0..self.height)
            .map(|r| {
                let costs: Vec<f64> = (0..self.width)
                    .filter(|&c| self.is_passable(r, c))
                    .map(|c| self.cost(r, c))
                    .collect();
                if costs.is_empty() {
                    f64::INFINITY
                } else {
                    costs.iter().sum::<f64>() / costs.len() as f64
                }
            })
            .collect()
    }
}
