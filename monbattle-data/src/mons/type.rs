use std::fmt;

use ahash::{
    HashMap,
    HashMapExt,
};
use serde::{
    Deserialize,
    Serialize,
    de::Visitor,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The type of a species or move, which determines weaknesses and resistances.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Electric"]
    Electric,
    #[string = "Grass"]
    Grass,
    #[string = "Ice"]
    Ice,
    #[string = "Fighting"]
    Fighting,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Flying"]
    Flying,
    #[string = "Psychic"]
    Psychic,
    #[string = "Bug"]
    Bug,
    #[string = "Rock"]
    Rock,
    #[string = "Ghost"]
    Ghost,
    #[string = "Dragon"]
    Dragon,
}

impl Type {
    /// Every type, in type chart order.
    pub const ALL: [Type; 15] = [
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Grass,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
    ];

    /// The index of the type in the type chart.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Type effectiveness of one type against another.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum TypeEffectiveness {
    /// No effect.
    None,
    /// Not very effective.
    Weak,
    /// Normal effectiveness.
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl TypeEffectiveness {
    /// The damage multiplier for this effectiveness.
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::None => 0f64,
            Self::Weak => 0.5,
            Self::Normal => 1f64,
            Self::Strong => 2f64,
        }
    }
}

impl From<f32> for TypeEffectiveness {
    fn from(value: f32) -> Self {
        if value < 0f32 || (value).abs() < f32::EPSILON {
            Self::None
        } else if value < 0.5 || (value - 0.5).abs() < f32::EPSILON {
            Self::Weak
        } else if value < 1f32 || (value - 1f32).abs() < f32::EPSILON {
            Self::Normal
        } else {
            Self::Strong
        }
    }
}

impl Into<f32> for TypeEffectiveness {
    fn into(self) -> f32 {
        self.multiplier() as f32
    }
}

impl Serialize for TypeEffectiveness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self {
            Self::Weak => serializer.serialize_f32(Into::<f32>::into(*self)),
            _ => serializer.serialize_u32(Into::<f32>::into(*self) as u32),
        }
    }
}

struct TypeEffectivenessVisitor;

impl<'de> Visitor<'de> for TypeEffectivenessVisitor {
    type Value = TypeEffectiveness;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of the following values: 0, 0.5, 1, 2")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }

    fn visit_f32<E>(self, v: f32) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Self::Value::from(v as f32))
    }
}

impl<'de> Deserialize<'de> for TypeEffectiveness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_f32(TypeEffectivenessVisitor)
    }
}

/// A type table, which contains type effectiveness information for types against some other value.
///
/// The key here is the attacking type.
pub type TypeTable<T> = HashMap<Type, HashMap<T, TypeEffectiveness>>;

/// A type chart, which contains all type effectiveness information for types against other types.
///
/// The key here is the attacking type. Pairings that are not listed are
/// [`TypeEffectiveness::Normal`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable<Type>,
}

impl TypeChart {
    pub fn new() -> Self {
        Self {
            types: TypeTable::new(),
        }
    }

    pub fn from_filled(types: TypeTable<Type>) -> Self {
        Self { types }
    }

    /// Looks up the effectiveness of an attacking type against a single defending type.
    pub fn effectiveness(&self, attacking: Type, defending: Type) -> TypeEffectiveness {
        self.types
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .copied()
            .unwrap_or_default()
    }
}


#[cfg(test)]
mod type_effectiveness_test {
    use ahash::HashMap;

    use crate::{
        Type,
        TypeChart,
        TypeEffectiveness,
        TypeTable,
        test_util::test_deserialization,
    };

    #[test]
    fn deserializes_from_number() {
        test_deserialization("0", TypeEffectiveness::None);
        test_deserialization("0.5", TypeEffectiveness::Weak);
        test_deserialization("1", TypeEffectiveness::Normal);
        test_deserialization("2", TypeEffectiveness::Strong);
    }

    #[test]
    fn deserializes_type_chart() {
        let str = r#"{
           "types": {
                "Water": {
                    "Fire": 2,
                    "Water": 0.5,
                    "Grass": 0.5,
                    "Ground": 2,
                    "Rock": 2,
                    "Dragon": 0.5
                }
            }
        }"#;
        let tc = serde_json::from_str::<TypeChart>(str).unwrap();
        let expected = TypeChart::from_filled(TypeTable::from_iter([(
            Type::Water,
            HashMap::from_iter([
                (Type::Fire, TypeEffectiveness::Strong),
                (Type::Water, TypeEffectiveness::Weak),
                (Type::Grass, TypeEffectiveness::Weak),
                (Type::Ground, TypeEffectiveness::Strong),
                (Type::Rock, TypeEffectiveness::Strong),
                (Type::Dragon, TypeEffectiveness::Weak),
            ]),
        )]));
        pretty_assertions::assert_eq!(tc, expected)
    }

    #[test]
    fn unlisted_pairings_are_normal() {
        let tc = TypeChart::from_filled(TypeTable::from_iter([(
            Type::Electric,
            HashMap::from_iter([(Type::Ground, TypeEffectiveness::None)]),
        )]));
        assert_eq!(
            tc.effectiveness(Type::Electric, Type::Ground),
            TypeEffectiveness::None
        );
        assert_eq!(
            tc.effectiveness(Type::Electric, Type::Fire),
            TypeEffectiveness::Normal
        );
        assert_eq!(
            tc.effectiveness(Type::Psychic, Type::Ghost),
            TypeEffectiveness::Normal
        );
    }
}
