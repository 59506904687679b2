use anyhow::Result;
use num::integer::Roots;

use crate::{
    Stat,
    StatTable,
    error::invalid_input_error,
    mons::{
        Ivs,
        MAX_LEVEL,
        MIN_LEVEL,
    },
};

/// Checks that a level is within the legal range.
pub fn validate_level(level: u8) -> Result<()> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(invalid_input_error(format!(
            "level {level} is outside of [{MIN_LEVEL}, {MAX_LEVEL}]"
        )));
    }
    Ok(())
}

/// Calculates a single stat.
///
/// HP gets a flat bonus of 50 inside the level scaling and 10 after it. Every other stat only adds
/// 5 after scaling. Effort contributes the integer square root of its value, divided by 8.
pub fn calculate_stat(stat: Stat, base: u16, iv: u8, ev: u16, level: u8) -> Result<u16> {
    validate_level(level)?;
    let (bonus, added) = match stat {
        Stat::HP => (50, 10),
        _ => (0, 5),
    };
    let effort = (ev as u32).sqrt() / 8;
    let value = (iv as u32 + base as u32 + effort + bonus) * level as u32 / 50 + added;
    u16::try_from(value)
        .map_err(|_| invalid_input_error(format!("{stat} value {value} overflows")))
}

/// Calculates all five stats for a Mon.
pub fn calculate_mon_stats(
    base_stats: &StatTable,
    ivs: &Ivs,
    evs: &StatTable,
    level: u8,
) -> Result<StatTable> {
    let mut stats = StatTable::default();
    for (stat, base) in base_stats {
        let value = calculate_stat(stat, base, ivs.get(stat), evs.get(stat), level)?;
        stats.set(stat, value);
    }
    log::trace!("calculated stats {stats:?} at level {level}");
    Ok(stats)
}
