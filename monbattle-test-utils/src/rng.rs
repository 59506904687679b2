use std::collections::hash_map::Entry;

use ahash::{
    HashMap,
    HashMapExt,
};
use monbattle_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// A controlled random number generator, for tests that need fine-grained control over individual
/// draws.
///
/// Fake values are keyed by their 1-based position in the draw sequence. Draws without a fake value
/// fall through to a real seeded generator.
pub struct ControlledRandomNumberGenerator {
    count: usize,
    fake_values: HashMap<usize, u64>,
    real: RealPseudoRandomNumberGenerator,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            count: 0,
            fake_values: HashMap::new(),
            real: RealPseudoRandomNumberGenerator::new(seed),
        }
    }

    /// Creates a generator that returns the given values, in order, for its first draws.
    pub fn with_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut prng = Self::new(Some(0));
        prng.insert_fake_values(
            values
                .into_iter()
                .enumerate()
                .map(|(i, value)| (i + 1, value)),
        );
        prng
    }

    /// The number of values drawn so far.
    pub fn sequence_count(&self) -> usize {
        self.count
    }

    pub fn insert_fake_value(&mut self, count: usize, value: u64) {
        self.fake_values.insert(count, value);
    }

    pub fn insert_fake_values<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        self.fake_values.extend(iterable);
    }

    pub fn insert_fake_values_relative_to_sequence_count<I>(&mut self, iterable: I)
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        let count = self.count;
        self.fake_values.extend(
            iterable
                .into_iter()
                .map(|(offset, value)| (offset + count, value)),
        );
    }
}

impl PseudoRandomNumberGenerator for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.real.initial_seed()
    }

    fn next(&mut self) -> u64 {
        // Always roll the real generator so the unfaked draws stay on the seeded sequence.
        let next = self.real.next();
        self.count += 1;
        match self.fake_values.entry(self.count) {
            Entry::Occupied(fake) => fake.remove(),
            Entry::Vacant(_) => next,
        }
    }
}
