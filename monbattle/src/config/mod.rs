mod engine_options;

pub use engine_options::{
    AiOptions,
    CaptureOptions,
    EngineOptions,
    StatusLevels,
};
