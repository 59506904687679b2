pub mod rand_util;

use rand::Rng;

/// Multiplier of the 64-bit linear congruential step.
const LCRNG_MULTIPLIER: u64 = 0x5D588B656C078965;
/// Increment of the 64-bit linear congruential step.
const LCRNG_INCREMENT: u64 = 0x269EC3;

/// Source of every random draw made during battle resolution.
///
/// Capture rolls, escape rolls, critical hits, damage variance, IV rolls and opponent move picks
/// all pull from a value of this trait through [`rand_util`]. A battle started from a known seed
/// therefore resolves identically every time.
pub trait PseudoRandomNumberGenerator: Send + Sync {
    /// Seed the battle started from.
    fn initial_seed(&self) -> u64;

    /// Advances the generator and returns a 32-bit draw, widened to `u64`.
    fn next(&mut self) -> u64;
}

/// Seeded generator used by real battles.
///
/// Advances a 64-bit LCRNG state and hands out its upper half.
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    state: u64,
}

impl RealPseudoRandomNumberGenerator {
    /// Starts a generator from `seed`, or from an entropy-sourced seed when none is given.
    pub fn new(seed: Option<u64>) -> Self {
        let initial_seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            initial_seed,
            state: initial_seed,
        }
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(LCRNG_MULTIPLIER)
            .wrapping_add(LCRNG_INCREMENT);
        // Low bits cycle with short periods.
        self.state >> 32
    }
}
