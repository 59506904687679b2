use monbattle_prng::PseudoRandomNumberGenerator;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    battle::attempt_escape,
    mons::Mon,
};

/// The kind of encounter a battle is.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum BattleCategory {
    #[string = "Wild"]
    #[default]
    Wild,
    #[string = "Trainer"]
    Trainer,
}

/// The trainer behind the opposing Mon.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    /// Trainer class, which decides which battle modifications apply.
    pub class: String,
    /// Dumb trainers do not avoid status moves against an already-statused Mon.
    #[serde(default)]
    pub dumb: bool,
}

impl Trainer {
    pub fn new<S>(class: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            class: class.into(),
            dumb: false,
        }
    }

    pub fn dumb(mut self) -> Self {
        self.dumb = true;
        self
    }
}

/// Transient state for a single encounter.
///
/// The active Mons on each side are owned by the caller and passed to each resolver.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleContext {
    pub category: BattleCategory,
    /// Number of escape attempts made so far in this encounter.
    #[serde(default)]
    pub escape_attempts: u32,
    /// The opposing trainer, if any.
    #[serde(default)]
    pub trainer: Option<Trainer>,
}

impl BattleContext {
    pub fn wild() -> Self {
        Self::default()
    }

    pub fn trainer(trainer: Trainer) -> Self {
        Self {
            category: BattleCategory::Trainer,
            escape_attempts: 0,
            trainer: Some(trainer),
        }
    }

    pub fn is_trainer_battle(&self) -> bool {
        self.category == BattleCategory::Trainer
    }

    /// The opposing trainer's class, if any.
    pub fn trainer_class(&self) -> Option<&str> {
        self.trainer.as_ref().map(|trainer| trainer.class.as_str())
    }

    /// Is the opposing trainer marked as dumb?
    pub fn trainer_is_dumb(&self) -> bool {
        self.trainer.as_ref().is_some_and(|trainer| trainer.dumb)
    }

    /// Attempts to flee from the opposing Mon, counting the attempt.
    ///
    /// The attempt is resolved with the number of previous attempts, then the counter increments
    /// regardless of the outcome.
    pub fn attempt_escape(
        &mut self,
        fleeing: &Mon,
        opponent: &Mon,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> bool {
        let escaped = attempt_escape(
            fleeing.stats.spe,
            opponent.stats.spe,
            self.escape_attempts,
            prng,
        );
        self.escape_attempts = self.escape_attempts.saturating_add(1);
        escaped
    }
}

#[cfg(test)]
mod context_test {
    use crate::battle::{
        BattleCategory,
        BattleContext,
        Trainer,
    };

    #[test]
    fn wild_battle_has_no_trainer() {
        let context = BattleContext::wild();
        assert_eq!(context.category, BattleCategory::Wild);
        assert!(!context.is_trainer_battle());
        assert_eq!(context.trainer_class(), None);
        assert!(!context.trainer_is_dumb());
    }

    #[test]
    fn trainer_battle_reports_class() {
        let context = BattleContext::trainer(Trainer::new("Gym Leader").dumb());
        assert!(context.is_trainer_battle());
        assert_eq!(context.trainer_class(), Some("Gym Leader"));
        assert!(context.trainer_is_dumb());
    }

    #[test]
    fn deserializes_context() {
        let context: BattleContext = serde_json::from_str(
            r#"{
                "category": "Trainer",
                "trainer": { "class": "Rival" }
            }"#,
        )
        .unwrap();
        pretty_assertions::assert_eq!(context, BattleContext::trainer(Trainer::new("Rival")));
    }
}
