use std::fmt;

use serde::{
    Deserialize,
    Serialize,
    de::{
        SeqAccess,
        Visitor,
    },
    ser::SerializeSeq,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The kind of a move preference, which determines how its arguments are read.
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
pub enum PreferenceKind {
    /// Prefer a particular named move.
    #[string = "Move"]
    Move,
    /// Prefer moves that raise the given stat on the user.
    #[string = "Raise"]
    Raise,
    /// Prefer moves that lower the given stat on the target.
    #[string = "Lower"]
    Lower,
    /// Prefer moves of the attacking type against a target with the defending type.
    #[string = "Super"]
    Super,
    /// Avoid moves of the attacking type against a target with the defending type.
    #[string = "Weak"]
    Weak,
}

impl PreferenceKind {
    /// The order kinds are evaluated in when a preference is allowed to fall through.
    pub const EVALUATION_ORDER: [PreferenceKind; 5] = [
        Self::Move,
        Self::Raise,
        Self::Lower,
        Self::Super,
        Self::Weak,
    ];

    /// The kinds evaluated for a preference of this kind when falling through.
    ///
    /// This is the kind itself followed by every kind after it in [`Self::EVALUATION_ORDER`].
    pub fn fallthrough(&self) -> &'static [PreferenceKind] {
        let index = Self::EVALUATION_ORDER
            .iter()
            .position(|kind| kind == self)
            .unwrap_or(Self::EVALUATION_ORDER.len());
        &Self::EVALUATION_ORDER[index..]
    }

    /// The priority adjustment applied when a preference of this kind matches.
    ///
    /// Lower priority is preferred.
    pub fn priority_adjustment(&self) -> i32 {
        match self {
            Self::Move | Self::Raise | Self::Lower | Self::Super => -1,
            Self::Weak => 1,
        }
    }
}

/// A single entry in a battle modification's ordered preference list.
///
/// Serialized as a tuple: `["Move", "Thunderbolt"]`, `["Raise", "atk"]`, `["Lower", "def"]`,
/// `["Super", "Water", "Electric"]` (defending type first, then attacking type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePreference {
    pub kind: PreferenceKind,
    /// Move name, stat name, or defending type, depending on the kind.
    pub subject: String,
    /// Attacking type for [`PreferenceKind::Super`] and [`PreferenceKind::Weak`].
    pub object: Option<String>,
}

impl MovePreference {
    pub fn new<S>(kind: PreferenceKind, subject: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            kind,
            subject: subject.into(),
            object: None,
        }
    }

    pub fn with_object<S, O>(kind: PreferenceKind, subject: S, object: O) -> Self
    where
        S: Into<String>,
        O: Into<String>,
    {
        Self {
            kind,
            subject: subject.into(),
            object: Some(object.into()),
        }
    }
}

impl Serialize for MovePreference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let len = if self.object.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.kind)?;
        seq.serialize_element(&self.subject)?;
        if let Some(object) = &self.object {
            seq.serialize_element(object)?;
        }
        seq.end()
    }
}

struct MovePreferenceVisitor;

impl<'de> Visitor<'de> for MovePreferenceVisitor {
    type Value = MovePreference;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a preference tuple of two or three elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let kind = seq
            .next_element::<PreferenceKind>()?
            .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
        let subject = seq
            .next_element::<String>()?
            .ok_or_else(|| serde::de::Error::invalid_length(1, &self))?;
        let object = seq.next_element::<String>()?;
        if seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
            return Err(serde::de::Error::invalid_length(4, &self));
        }
        Ok(MovePreference {
            kind,
            subject,
            object,
        })
    }
}

impl<'de> Deserialize<'de> for MovePreference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(MovePreferenceVisitor)
    }
}
