use crate::PseudoRandomNumberGenerator;

const REAL_SCALE: f64 = 4294967296.0;

/// Returns whether a random event occurs, `numerator` times out of every `denominator`.
pub fn chance(
    prng: &mut dyn PseudoRandomNumberGenerator,
    numerator: u64,
    denominator: u64,
) -> bool {
    prng.next().rem_euclid(denominator) < numerator
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random integer in the range `[0, max)`.
pub fn uniform_int(prng: &mut dyn PseudoRandomNumberGenerator, max: u64) -> u64 {
    range(prng, 0, max)
}

/// Returns a random real number in the range `[min, max)`.
///
/// Only the low 32 bits of the draw participate.
pub fn real(prng: &mut dyn PseudoRandomNumberGenerator, min: f64, max: f64) -> f64 {
    let unit = (prng.next() & 0xFFFF_FFFF) as f64 / REAL_SCALE;
    min + unit * (max - min)
}

/// Returns a random element from the given slice.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    if slice.len() == 1 {
        return slice.first();
    }
    let index = range(prng, 0, slice.len() as u64);
    slice.get(index as usize)
}
