//! Deterministic simulation-level RNG.
//!
//! The tick loop itself never draws random numbers; `SimRng` exists so
//! generated scenarios (random starts, destinations, headings) are
//! reproducible from a single `u64` seed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Direction, GridPos};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG for scenario generation.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive the RNG for run `index` of a batch seeded with `seed`.
    ///
    /// Runs never share state, so adding runs to the end of a batch does not
    /// change the earlier ones.
    pub fn for_run(seed: u64, index: u64) -> SimRng {
        SimRng(SmallRng::seed_from_u64(seed ^ index.wrapping_mul(MIXING_CONSTANT)))
    }

    /// Uniform cell in the square `[-extent, extent]²`.
    pub fn grid_pos(&mut self, extent: i32) -> GridPos {
        let extent = extent.saturating_abs();
        GridPos::new(
            self.0.gen_range(-extent..=extent),
            self.0.gen_range(-extent..=extent),
        )
    }

    /// Uniform heading.
    pub fn direction(&mut self) -> Direction {
        Direction::ALL[self.0.gen_range(0..Direction::ALL.len())]
    }
}
