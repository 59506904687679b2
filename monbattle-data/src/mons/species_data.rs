use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    ExperienceType,
    LearnSet,
    StatTable,
    Type,
};

/// Data about a particular species.
///
/// Species data is common to all Mons of a given species. Data about a specific Mon (such as its
/// level, stats, or status) does not belong here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesData {
    /// The name of the species.
    pub name: String,
    /// The primary type of the species.
    pub primary_type: Type,
    /// The secondary type of the species, if it exists.
    pub secondary_type: Option<Type>,
    /// Base stats.
    pub base_stats: StatTable,
    /// Catch rate.
    ///
    /// Catch rate is represented as one byte (a value between 0 and 255).
    pub catch_rate: u8,
    /// Base experience yield when defeating this species.
    pub base_exp_yield: u16,
    /// Experience type of this species, which determines how much experience is required for
    /// leveling up.
    ///
    /// Missing experience types fall back to [`ExperienceType::MediumFast`].
    pub experience_type: Option<ExperienceType>,
    /// Learnset, which contains all moves this species can acquire.
    #[serde(default)]
    pub learnset: LearnSet,
}

impl SpeciesData {
    /// Utility method for returning the species' types.
    pub fn types(&self) -> Vec<Type> {
        let mut types = Vec::from_iter([self.primary_type]);
        if let Some(secondary_type) = self.secondary_type {
            if secondary_type != self.primary_type {
                types.push(secondary_type);
            }
        }
        types
    }

    /// Does the species have the given type?
    pub fn has_type(&self, typ: Type) -> bool {
        self.primary_type == typ || self.secondary_type.is_some_and(|t| t == typ)
    }

    /// The experience type of the species, with the default applied.
    pub fn experience_type(&self) -> ExperienceType {
        self.experience_type.unwrap_or_default()
    }
}

#[cfg(test)]
mod species_data_test {
    use crate::{
        ExperienceType,
        SpeciesData,
        StatTable,
        Type,
    };

    fn geodude() -> SpeciesData {
        serde_json::from_str(
            r#"{
                "name": "Geodude",
                "primary_type": "Rock",
                "secondary_type": "Ground",
                "base_stats": { "hp": 40, "atk": 80, "def": 100, "spc": 30, "spe": 20 },
                "catch_rate": 255,
                "base_exp_yield": 86,
                "experience_type": "Medium Slow"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn deserializes_species() {
        let species = geodude();
        assert_eq!(species.name, "Geodude");
        assert_eq!(species.types(), vec![Type::Rock, Type::Ground]);
        pretty_assertions::assert_eq!(
            species.base_stats,
            StatTable {
                hp: 40,
                atk: 80,
                def: 100,
                spc: 30,
                spe: 20,
            }
        );
        assert_eq!(species.experience_type(), ExperienceType::MediumSlow);
        assert!(species.learnset.natural.is_empty());
    }

    #[test]
    fn missing_experience_type_defaults_to_medium_fast() {
        let mut species = geodude();
        species.experience_type = None;
        assert_eq!(species.experience_type(), ExperienceType::MediumFast);
    }

    #[test]
    fn checks_type_membership() {
        let species = geodude();
        assert!(species.has_type(Type::Rock));
        assert!(species.has_type(Type::Ground));
        assert!(!species.has_type(Type::Water));
    }
}
