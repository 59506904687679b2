use std::{
    fmt,
    panic::Location,
};

/// A step of battle resolution that was in progress when an inner error surfaced.
///
/// Resolvers attach one of these while loading catalogs or computing an outcome, so a failure
/// reads as a chain like "failed to calculate damage: max HP cannot be 0". The debug form also
/// names the engine source line that attached the step.
pub struct ContextError {
    step: String,
    attached_at: &'static Location<'static>,
}

impl ContextError {
    #[track_caller]
    pub fn new<M>(step: M) -> Self
    where
        M: fmt::Display,
    {
        Self {
            step: step.to_string(),
            attached_at: Location::caller(),
        }
    }

    /// The resolution step being described.
    pub fn step(&self) -> &str {
        &self.step
    }

    /// Where in the engine the step was attached.
    pub fn attached_at(&self) -> &'static Location<'static> {
        self.attached_at
    }
}

impl fmt::Debug for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}:{}]",
            self.step,
            self.attached_at.file(),
            self.attached_at.line()
        )
    }
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.step)
    }
}
