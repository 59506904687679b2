use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move, which determines which stats participate in damage.
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
pub enum MoveCategory {
    /// Uses Attack and Defense.
    #[string = "Physical"]
    #[default]
    Physical,
    /// Uses Special on both sides.
    #[string = "Special"]
    Special,
    /// Deals no direct damage.
    #[string = "Status"]
    #[alias = "Non-Damaging"]
    #[alias = "NonDamaging"]
    Status,
}

#[cfg(test)]
mod move_category_test {
    use crate::{
        MoveCategory,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(MoveCategory::Physical, "Physical");
        test_string_serialization(MoveCategory::Special, "Special");
        test_string_serialization(MoveCategory::Status, "Status");
    }

    #[test]
    fn deserializes_non_damaging_alias() {
        test_string_deserialization("Non-Damaging", MoveCategory::Status);
        test_string_deserialization("nondamaging", MoveCategory::Status);
    }
}
