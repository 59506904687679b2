use serde::{
    Deserialize,
    Serialize,
};

use crate::ExperienceType;

/// A Mon's progress towards its next level.
///
/// `remaining` is always `next - current`, and never negative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub current: u32,
    pub next: u32,
    pub remaining: u32,
}

impl ExperienceRecord {
    /// The record of a Mon that has just reached the given level.
    pub fn new(experience_type: ExperienceType, level: u8) -> Self {
        Self::with_current(
            experience_type,
            level,
            experience_type.exp_at_level(level),
        )
    }

    /// The record of a Mon at the given level holding some amount of experience.
    pub fn with_current(experience_type: ExperienceType, level: u8, current: u32) -> Self {
        let next = experience_type.exp_at_level(level.saturating_add(1));
        Self {
            current,
            next,
            remaining: next.saturating_sub(current),
        }
    }
}

#[cfg(test)]
mod experience_test {
    use crate::{
        ExperienceType,
        mons::ExperienceRecord,
    };

    #[test]
    fn seeds_level_10_medium_fast() {
        pretty_assertions::assert_eq!(
            ExperienceRecord::new(ExperienceType::MediumFast, 10),
            ExperienceRecord {
                current: 1000,
                next: 1331,
                remaining: 331,
            }
        );
    }

    #[test]
    fn seeds_level_1_medium_slow_from_zero() {
        pretty_assertions::assert_eq!(
            ExperienceRecord::new(ExperienceType::MediumSlow, 1),
            ExperienceRecord {
                current: 0,
                next: 9,
                remaining: 9,
            }
        );
    }

    #[test]
    fn remaining_never_underflows() {
        let record = ExperienceRecord::with_current(ExperienceType::Fast, 5, 1_000_000);
        assert_eq!(record.remaining, 0);
    }
}
