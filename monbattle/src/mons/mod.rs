mod experience;
mod ivs;
mod mon;

pub use experience::ExperienceRecord;
pub use ivs::Ivs;
pub use mon::{
    MAX_LEVEL,
    MAX_MOVES,
    MIN_LEVEL,
    Mon,
    MoveSlot,
};
