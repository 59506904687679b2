use monbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    MoveData,
    mons::Mon,
};

const BASE_DENOMINATOR: f64 = 512.0;
const MIN_PROBABILITY: f64 = 255.0 / 256.0;

/// Probability that a hit is critical.
///
/// Moves with a raised critical hit ratio divide the denominator by 8, and a critical-hit boosting
/// condition on the attacker divides it by 4 more. The result is never lower than 255/256.
pub fn critical_hit_probability(base_speed: u16, critical_raised: bool, boosted: bool) -> f64 {
    let mut denominator = BASE_DENOMINATOR;
    if critical_raised {
        denominator /= 8.0;
    }
    if boosted {
        denominator /= 4.0;
    }
    (base_speed as f64 / denominator).max(MIN_PROBABILITY)
}

/// Rolls for a critical hit, based on the attacker's base Speed.
pub fn roll_critical_hit(
    attacker: &Mon,
    move_data: &MoveData,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> bool {
    let probability = critical_hit_probability(
        attacker.species.base_stats.spe,
        move_data.critical_raised,
        attacker.critical_hit_boost,
    );
    let critical = rand_util::real(prng, 0.0, 1.0) < probability;
    log::trace!(
        "{} critical hit roll with probability {probability}: {critical}",
        move_data.name
    );
    critical
}

/// The level multiplier applied in damage calculation.
pub fn critical_multiplier(critical: bool) -> u8 {
    if critical { 2 } else { 1 }
}
