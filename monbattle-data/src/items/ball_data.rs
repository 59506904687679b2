use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The type of a ball.
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
pub enum BallType {
    #[string = "Poke"]
    Poke,
    #[string = "Great"]
    Great,
    #[string = "Ultra"]
    Ultra,
    #[string = "Safari"]
    Safari,
    /// Always catches the target.
    #[string = "Master"]
    Master,
}

/// Data about a particular ball used for capturing wild Mons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallData {
    /// Name of the ball.
    pub name: String,
    /// Ball type.
    pub ball_type: BallType,
    /// Exclusive upper bound of the first capture roll.
    ///
    /// Better balls roll lower, which makes the roll more likely to fall under the catch rate.
    pub probability_max: u16,
    /// Ball rate, which divides the HP factor and the shake factor.
    pub rate: u16,
}

impl BallData {
    /// Does the ball catch unconditionally?
    pub fn always_catches(&self) -> bool {
        self.ball_type == BallType::Master
    }
}
