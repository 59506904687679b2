mod experience_type;
mod learnset;
mod species_data;
mod stat;
mod status;
mod r#type;

pub use experience_type::ExperienceType;
pub use learnset::{
    LearnSet,
    LearnedMove,
};
pub use species_data::SpeciesData;
pub use stat::{
    PartialStatTable,
    Stat,
    StatMap,
    StatTable,
    StatTableEntries,
};
pub use status::Status;
pub use r#type::{
    Type,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};
