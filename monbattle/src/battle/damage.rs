use anyhow::Result;
use monbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    MoveCategory,
    MoveData,
    Type,
    TypeChart,
    battle::{
        critical_multiplier,
        roll_critical_hit,
        type_effectiveness,
    },
    error::invalid_input_error,
    mons::Mon,
};

const STAB_MULTIPLIER: f64 = 1.5;
const MIN_RANDOM_FACTOR: f64 = 0.85;
const MAX_RANDOM_FACTOR: f64 = 1.0;

/// The result of a single damaging hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitOutcome {
    pub damage: u32,
    pub critical: bool,
    /// Type effectiveness multiplier of the move against the defender.
    pub effectiveness: f64,
}

impl HitOutcome {
    /// A hit that the defender's types fully block.
    pub fn immune() -> Self {
        Self {
            damage: 0,
            critical: false,
            effectiveness: 0.0,
        }
    }

    pub fn is_immune(&self) -> bool {
        self.effectiveness == 0.0
    }
}

/// Same-type attack bonus.
pub fn same_type_attack_bonus(attacker_types: &[Type], move_type: Type) -> f64 {
    if attacker_types.contains(&move_type) {
        STAB_MULTIPLIER
    } else {
        1.0
    }
}

/// Combines same-type attack bonus, type effectiveness, and a random factor in `[0.85, 1.0)`.
pub fn damage_modifier(
    attacker: &Mon,
    move_data: &MoveData,
    effectiveness: f64,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> f64 {
    let stab = same_type_attack_bonus(&attacker.types(), move_data.primary_type);
    let random = rand_util::real(prng, MIN_RANDOM_FACTOR, MAX_RANDOM_FACTOR);
    stab * effectiveness * random
}

/// Calculates damage from raw values.
///
/// A critical hit doubles the attacker's effective level. The result is never lower than 1.
pub fn calculate_damage(
    level: u8,
    critical_multiplier: u8,
    attack: u16,
    defense: u16,
    base_power: u32,
    modifier: f64,
) -> Result<u32> {
    if defense == 0 {
        return Err(invalid_input_error("defense cannot be 0"));
    }
    let level = level as f64 * critical_multiplier as f64;
    let raw = ((2.0 * level + 10.0) / 250.0 * (attack as f64 / defense as f64) * base_power as f64
        + 2.0)
        .floor();
    let damage = (raw * modifier).max(1.0).round();
    log::trace!(
        "damage {damage} from level {level}, attack {attack}, defense {defense}, base power {base_power}, modifier {modifier}"
    );
    Ok(damage as u32)
}

/// Calculates damage for a move between two Mons.
///
/// Physical moves use Attack against Defense, and special moves use Special on both sides.
pub fn move_damage(
    attacker: &Mon,
    defender: &Mon,
    move_data: &MoveData,
    critical: bool,
    modifier: f64,
) -> Result<u32> {
    let (attack, defense) = match move_data.category {
        MoveCategory::Physical => (attacker.stats.atk, defender.stats.def),
        MoveCategory::Special => (attacker.stats.spc, defender.stats.spc),
        MoveCategory::Status => {
            return Err(invalid_input_error(format!(
                "{} does not deal damage",
                move_data.name
            )));
        }
    };
    calculate_damage(
        attacker.level,
        critical_multiplier(critical),
        attack,
        defense,
        move_data.base_power,
        modifier,
    )
}

/// Resolves a damaging move that connects with the defender.
///
/// Runs the critical hit roll, type effectiveness, the damage modifier, and the damage formula in
/// order. A move the defender is immune to deals no damage and draws no random numbers.
pub fn resolve_hit(
    type_chart: &TypeChart,
    attacker: &Mon,
    defender: &Mon,
    move_data: &MoveData,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> Result<HitOutcome> {
    if !move_data.deals_damage() {
        return Err(invalid_input_error(format!(
            "{} does not deal damage",
            move_data.name
        )));
    }
    let effectiveness = type_effectiveness(type_chart, move_data.primary_type, &defender.types());
    if effectiveness == 0.0 {
        log::debug!("{} is immune to {}", defender.nickname, move_data.name);
        return Ok(HitOutcome::immune());
    }
    let critical = roll_critical_hit(attacker, move_data, prng);
    let modifier = damage_modifier(attacker, move_data, effectiveness, prng);
    let damage = move_damage(attacker, defender, move_data, critical, modifier)?;
    log::debug!(
        "{} used {} on {} for {damage} damage",
        attacker.nickname,
        move_data.name,
        defender.nickname
    );
    Ok(HitOutcome {
        damage,
        critical,
        effectiveness,
    })
}
