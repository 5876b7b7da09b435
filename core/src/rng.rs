//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! The engine itself is fully deterministic; the only consumer of
//! randomness is wall texturing, and it flows through a `WallRng`
//! seeded from a single master seed. Same seed, same wall.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A deterministic RNG for procedural wall texturing.
pub struct WallRng {
    inner: Pcg64Mcg,
}

impl WallRng {
    pub fn new(master_seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(master_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Symmetric jitter in [-spread, +spread).
    pub fn jitter(&mut self, spread: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * spread
    }
}
