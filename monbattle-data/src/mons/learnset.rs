use serde::{
    Deserialize,
    Serialize,
};

/// A single move acquisition entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnedMove {
    /// Name of the move.
    #[serde(rename = "move")]
    pub name: String,
    /// Level the move is learned at.
    ///
    /// Machine moves are learnable at any level and record 0.
    #[serde(default)]
    pub level: u8,
}

/// The moves a species can acquire, grouped by how they are acquired.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnSet {
    /// Moves learned naturally by leveling up, ordered by level.
    #[serde(default)]
    pub natural: Vec<LearnedMove>,
    /// Moves learnable by Technical Machine.
    #[serde(default)]
    pub tm: Vec<LearnedMove>,
    /// Moves learnable by Hidden Machine.
    #[serde(default)]
    pub hm: Vec<LearnedMove>,
}

impl LearnSet {
    /// The natural moves known at the given level, oldest first.
    ///
    /// Only the last `limit` moves are kept, which mirrors a newly generated Mon forgetting its
    /// oldest moves.
    pub fn natural_moves_at_level(&self, level: u8, limit: usize) -> Vec<&str> {
        let mut known = self
            .natural
            .iter()
            .filter(|learned| learned.level <= level)
            .collect::<Vec<_>>();
        known.sort_by_key(|learned| learned.level);
        let skip = known.len().saturating_sub(limit);
        known
            .into_iter()
            .skip(skip)
            .map(|learned| learned.name.as_str())
            .collect()
    }
}
