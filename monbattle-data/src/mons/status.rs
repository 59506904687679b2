use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A non-volatile status condition.
///
/// A Mon carries at most one status at a time. A Mon with no status has no entry.
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
pub enum Status {
    #[string = "Sleep"]
    #[alias = "SLP"]
    Sleep,
    #[string = "Freeze"]
    #[alias = "FRZ"]
    Freeze,
    #[string = "Paralyze"]
    #[alias = "PAR"]
    Paralyze,
    #[string = "Burn"]
    #[alias = "BRN"]
    Burn,
    #[string = "Poison"]
    #[alias = "PSN"]
    Poison,
}

impl Status {
    /// Does the status completely immobilize the Mon?
    ///
    /// Immobilizing statuses make capture easier than the others.
    pub fn immobilizing(&self) -> bool {
        match self {
            Self::Sleep | Self::Freeze => true,
            Self::Paralyze | Self::Burn | Self::Poison => false,
        }
    }
}
