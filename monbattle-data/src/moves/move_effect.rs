use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Stat;

/// The primary effect tag of a move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveEffect {
    /// Inflicts a status condition on the target.
    #[string = "Status"]
    Status,
    /// Raises one of the user's stats.
    #[string = "Raise"]
    Raise,
    /// Lowers one of the target's stats.
    #[string = "Lower"]
    Lower,
}

/// A stat stage change applied by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatChange {
    /// Stat that changes.
    pub stat: Stat,
    /// Number of stages.
    pub amount: u8,
}
