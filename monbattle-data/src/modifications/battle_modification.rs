use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Id,
    MovePreference,
    PreferenceKind,
    Type,
    TypeChart,
    TypeEffectiveness,
};

/// A named adjustment to how opposing trainers choose moves.
///
/// Each modification applies to a set of trainer classes. For every candidate move, the ordered
/// preference list is walked until the first match, which nudges that move's priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleModification {
    /// Name of the modification.
    pub name: String,
    /// Trainer classes that use this modification.
    #[serde(default)]
    pub trainer_classes: Vec<String>,
    /// Ordered preferences.
    #[serde(default)]
    pub preferences: Vec<MovePreference>,
}

impl BattleModification {
    /// Does the modification apply to the given trainer class?
    pub fn applies_to(&self, trainer_class: &str) -> bool {
        let trainer_class = Id::from(trainer_class);
        self.trainer_classes
            .iter()
            .any(|class| Id::from(class.as_str()) == trainer_class)
    }

    /// Builds a type-effectiveness preference table from a type chart.
    ///
    /// Every super effective pairing becomes a [`PreferenceKind::Super`] entry, and every not very
    /// effective or ineffective pairing becomes a [`PreferenceKind::Weak`] entry.
    pub fn type_preferences_from_chart(
        name: &str,
        type_chart: &TypeChart,
        trainer_classes: Vec<String>,
    ) -> Self {
        let mut preferences = Vec::new();
        for attacking in Type::ALL {
            for defending in Type::ALL {
                let kind = match type_chart.effectiveness(attacking, defending) {
                    TypeEffectiveness::Strong => PreferenceKind::Super,
                    TypeEffectiveness::Weak | TypeEffectiveness::None => PreferenceKind::Weak,
                    TypeEffectiveness::Normal => continue,
                };
                preferences.push(MovePreference::with_object(
                    kind,
                    defending.to_string(),
                    attacking.to_string(),
                ));
            }
        }
        Self {
            name: name.to_owned(),
            trainer_classes,
            preferences,
        }
    }
}
