use anyhow::Result;
use monbattle_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    BallData,
    config::CaptureOptions,
    error::invalid_input_error,
    mons::Mon,
};

/// The result of throwing a ball at a Mon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    Caught,
    /// The Mon escaped after the ball shook some number of times, from 0 to 3.
    BrokeFree { shakes: u8 },
}

impl CaptureOutcome {
    pub fn caught(&self) -> bool {
        matches!(self, Self::Caught)
    }
}

/// The HP factor shared by the capture roll and the shake count.
///
/// Lower HP relative to max HP, and lower ball rates, produce a larger factor, clamped to
/// `[1, 255]`.
pub fn ball_catch_factor(max_hp: u16, hp: u16, rate: u16) -> Result<u64> {
    if rate == 0 {
        return Err(invalid_input_error("ball rate cannot be 0"));
    }
    if max_hp == 0 {
        return Err(invalid_input_error("max HP cannot be 0"));
    }
    if hp == 0 {
        return Err(invalid_input_error("current HP cannot be 0"));
    }
    let factor = (max_hp as u64 * 255 * 4) / (hp as u64 * rate as u64);
    Ok(factor.clamp(1, 255))
}

/// Decides whether a ball catches the target.
pub fn attempt_capture(
    options: &CaptureOptions,
    target: &Mon,
    ball: &BallData,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> Result<bool> {
    if ball.always_catches() {
        log::debug!("{} always catches {}", ball.name, target.nickname);
        return Ok(true);
    }
    if ball.probability_max == 0 {
        return Err(invalid_input_error(format!(
            "{} probability max cannot be 0",
            ball.name
        )));
    }
    let factor = ball_catch_factor(target.max_hp(), target.hp, ball.rate)?;

    let n = rand_util::range(prng, 0, ball.probability_max as u64) as i64;
    if let Some(status) = target.status {
        let threshold = if status.immobilizing() { 25 } else { 12 };
        if n < threshold {
            log::debug!("{} caught {status} {} with roll {n}", ball.name, target.nickname);
            return Ok(true);
        }
    }

    let status_level = options.status_levels.get(target.status) as i64;
    let catch_rate = target.species.catch_rate as i64;
    if n - status_level > catch_rate {
        log::debug!(
            "{} broke free from {}: roll {n} exceeds catch rate {catch_rate}",
            target.nickname,
            ball.name
        );
        return Ok(false);
    }

    let m = rand_util::range(prng, 0, 256);
    let caught = factor > m;
    log::debug!(
        "{} {} with factor {factor} against roll {m}",
        ball.name,
        if caught { "caught" } else { "missed" },
    );
    Ok(caught)
}

/// Number of times the ball shakes before the target breaks free.
pub fn ball_shakes(target: &Mon, ball: &BallData) -> Result<u8> {
    let factor = ball_catch_factor(target.max_hp(), target.hp, ball.rate)?;
    let d = target.species.catch_rate as u64 * 100 / ball.rate as u64;
    if d >= 256 {
        return Ok(3);
    }
    let bonus = match target.status {
        Some(status) if status.immobilizing() => 10,
        Some(_) => 5,
        None => 0,
    };
    let x = d * factor / 255 + bonus;
    log::trace!("shake value {x} from d = {d}, factor = {factor}");
    Ok(match x {
        0..10 => 0,
        10..30 => 1,
        30..70 => 2,
        _ => 3,
    })
}

/// Resolves a full capture attempt, including the shake count on failure.
pub fn resolve_capture(
    options: &CaptureOptions,
    target: &Mon,
    ball: &BallData,
    prng: &mut dyn PseudoRandomNumberGenerator,
) -> Result<CaptureOutcome> {
    if attempt_capture(options, target, ball, prng)? {
        Ok(CaptureOutcome::Caught)
    } else {
        Ok(CaptureOutcome::BrokeFree {
            shakes: ball_shakes(target, ball)?,
        })
    }
}
