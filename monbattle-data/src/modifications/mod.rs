mod battle_modification;
mod move_preference;

pub use battle_modification::BattleModification;
pub use move_preference::{
    MovePreference,
    PreferenceKind,
};
