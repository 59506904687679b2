use monbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::Stat;

/// Individual values, fixed when a Mon is generated.
///
/// Only four values are rolled. The HP value is assembled from the lowest bit of each of the
/// other four.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ivs {
    pub atk: u8,
    pub def: u8,
    pub spe: u8,
    pub spc: u8,
}

impl Ivs {
    /// Largest value of any single IV.
    pub const MAX: u8 = 15;

    pub fn new(atk: u8, def: u8, spe: u8, spc: u8) -> Self {
        Self { atk, def, spe, spc }
    }

    /// Rolls each IV uniformly from `[0, 15]`, in the order Attack, Defense, Speed, Special.
    pub fn roll(prng: &mut dyn PseudoRandomNumberGenerator) -> Self {
        let atk = Self::roll_one(prng);
        let def = Self::roll_one(prng);
        let spe = Self::roll_one(prng);
        let spc = Self::roll_one(prng);
        Self { atk, def, spe, spc }
    }

    fn roll_one(prng: &mut dyn PseudoRandomNumberGenerator) -> u8 {
        rand_util::uniform_int(prng, Self::MAX as u64 + 1) as u8
    }

    /// The derived HP IV.
    pub fn hp(&self) -> u8 {
        8 * (self.atk % 2) + 4 * (self.def % 2) + 2 * (self.spe % 2) + (self.spc % 2)
    }

    /// Returns the IV for the given stat.
    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::HP => self.hp(),
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spc => self.spc,
            Stat::Spe => self.spe,
        }
    }
}
