use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    MoveCategory,
    MoveEffect,
    Stat,
    StatChange,
    Status,
    Type,
};

/// Data about a particular move.
///
/// Each turn, a Mon uses one move to affect the battle. Moves can damage the opposing Mon, inflict
/// a status condition, or raise and lower stats.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move category.
    pub category: MoveCategory,
    /// Move type.
    pub primary_type: Type,
    /// Base power.
    #[serde(default)]
    pub base_power: u32,
    /// Base accuracy, as a percentage. Moves without one never miss.
    pub accuracy: Option<u8>,
    /// Total power points, which is the number of times this move can be used.
    #[serde(default)]
    pub pp: u8,
    /// Move priority.
    pub priority: Option<i8>,
    /// Does the move have an increased critical hit ratio?
    #[serde(default)]
    pub critical_raised: bool,

    /// Primary effect tag.
    pub effect: Option<MoveEffect>,
    /// Stat raised on the user.
    pub raise: Option<StatChange>,
    /// Stat lowered on the target.
    pub lower: Option<StatChange>,
    /// Status inflicted on the target.
    pub status: Option<Status>,
}

impl MoveData {
    /// Does the move deal direct damage?
    pub fn deals_damage(&self) -> bool {
        self.category != MoveCategory::Status
    }

    /// Does the move do nothing but inflict a status condition?
    pub fn purely_status_inflicting(&self) -> bool {
        !self.deals_damage() && self.effect == Some(MoveEffect::Status)
    }

    /// Does the move raise the given stat on the user?
    pub fn raises(&self, stat: Stat) -> bool {
        self.raise.is_some_and(|change| change.stat == stat)
    }

    /// Does the move lower the given stat on the target?
    pub fn lowers(&self, stat: Stat) -> bool {
        self.lower.is_some_and(|change| change.stat == stat)
    }
}
