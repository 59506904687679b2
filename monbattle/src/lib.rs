extern crate alloc;

pub mod ai;
pub mod battle;
pub mod config;
mod engine;
pub mod error;
pub mod mons;
pub mod rng;

pub use engine::BattleEngine;
pub use monbattle_data::*;
