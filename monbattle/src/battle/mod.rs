mod capture;
mod context;
mod critical_hit;
mod damage;
mod escape;
mod experience;
mod health_bar;
mod stats;
mod type_effectiveness;

pub use capture::{
    CaptureOutcome,
    attempt_capture,
    ball_catch_factor,
    ball_shakes,
    resolve_capture,
};
pub use context::{
    BattleCategory,
    BattleContext,
    Trainer,
};
pub use critical_hit::{
    critical_hit_probability,
    critical_multiplier,
    roll_critical_hit,
};
pub use damage::{
    HitOutcome,
    calculate_damage,
    damage_modifier,
    move_damage,
    resolve_hit,
    same_type_attack_bonus,
};
pub use escape::attempt_escape;
pub use experience::experience_gained;
pub use health_bar::health_bar_width;
pub use stats::{
    calculate_mon_stats,
    calculate_stat,
    validate_level,
};
pub use type_effectiveness::type_effectiveness;
