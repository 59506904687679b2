use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Experience type, which determines how much experience is required for a species to level up.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum ExperienceType {
    #[string = "Fast"]
    Fast,
    #[string = "Medium Fast"]
    #[alias = "mediumFast"]
    #[alias = "Medium"]
    #[default]
    MediumFast,
    #[string = "Medium Slow"]
    #[alias = "mediumSlow"]
    MediumSlow,
    #[string = "Slow"]
    Slow,
}

impl ExperienceType {
    /// The amount of experience a Mon at the given level should have.
    ///
    /// The Medium Slow curve dips below zero at level 1, so it is clamped to zero.
    pub fn exp_at_level(&self, level: u8) -> u32 {
        let level = level as i64;
        let squared_level = level * level;
        let cubed_level = squared_level * level;
        let exp = match self {
            Self::Fast => (4 * cubed_level) / 5,
            Self::MediumFast => cubed_level,
            Self::MediumSlow => (6 * cubed_level) / 5 - 15 * squared_level + 100 * level - 140,
            Self::Slow => (5 * cubed_level) / 4,
        };
        exp.max(0) as u32
    }

    /// Calculates a Mon's level based on experience points.
    ///
    /// Experience below the level 1 threshold still counts as level 1.
    pub fn level_from_exp(&self, exp: u32) -> u8 {
        (2..=100)
            .rev()
            .find(|level| self.exp_at_level(*level) <= exp)
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod experience_type_test {
    use crate::{
        ExperienceType,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(ExperienceType::Fast, "Fast");
        test_string_serialization(ExperienceType::MediumFast, "Medium Fast");
        test_string_serialization(ExperienceType::MediumSlow, "Medium Slow");
        test_string_serialization(ExperienceType::Slow, "Slow");
    }

    #[test]
    fn deserializes_camel_case_aliases() {
        test_string_deserialization("mediumFast", ExperienceType::MediumFast);
        test_string_deserialization("mediumSlow", ExperienceType::MediumSlow);
        test_string_deserialization("fast", ExperienceType::Fast);
        test_string_deserialization("slow", ExperienceType::Slow);
    }

    #[test]
    fn defaults_to_medium_fast() {
        assert_eq!(ExperienceType::default(), ExperienceType::MediumFast);
    }

    #[test]
    fn calculates_experience_at_level() {
        assert_eq!(ExperienceType::Fast.exp_at_level(1), 0);
        assert_eq!(ExperienceType::Fast.exp_at_level(2), 6);
        assert_eq!(ExperienceType::Fast.exp_at_level(10), 800);
        assert_eq!(ExperienceType::Fast.exp_at_level(50), 100000);
        assert_eq!(ExperienceType::Fast.exp_at_level(100), 800000);

        assert_eq!(ExperienceType::MediumFast.exp_at_level(1), 1);
        assert_eq!(ExperienceType::MediumFast.exp_at_level(10), 1000);
        assert_eq!(ExperienceType::MediumFast.exp_at_level(11), 1331);
        assert_eq!(ExperienceType::MediumFast.exp_at_level(100), 1000000);

        assert_eq!(ExperienceType::MediumSlow.exp_at_level(1), 0);
        assert_eq!(ExperienceType::MediumSlow.exp_at_level(2), 9);
        assert_eq!(ExperienceType::MediumSlow.exp_at_level(10), 560);
        assert_eq!(ExperienceType::MediumSlow.exp_at_level(20), 5460);
        assert_eq!(ExperienceType::MediumSlow.exp_at_level(100), 1059860);

        assert_eq!(ExperienceType::Slow.exp_at_level(1), 1);
        assert_eq!(ExperienceType::Slow.exp_at_level(11), 1663);
        assert_eq!(ExperienceType::Slow.exp_at_level(100), 1250000);
    }

    #[test]
    fn calculates_level_from_exp() {
        assert_eq!(ExperienceType::MediumFast.level_from_exp(0), 1);
        assert_eq!(ExperienceType::MediumFast.level_from_exp(999), 9);
        assert_eq!(ExperienceType::MediumFast.level_from_exp(1000), 10);
        assert_eq!(ExperienceType::MediumFast.level_from_exp(1330), 10);
        assert_eq!(ExperienceType::MediumFast.level_from_exp(1331), 11);
        assert_eq!(ExperienceType::MediumFast.level_from_exp(5_000_000), 100);

        assert_eq!(ExperienceType::MediumSlow.level_from_exp(0), 1);
        assert_eq!(ExperienceType::MediumSlow.level_from_exp(8), 1);
        assert_eq!(ExperienceType::MediumSlow.level_from_exp(9), 2);
    }
}
