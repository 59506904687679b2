use std::{
    fs::File,
    path::Path,
};

use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Status,
    error::WrapResultError,
};

fn default_true() -> bool {
    true
}

/// Per-status adjustment subtracted from the first capture draw before it is compared against the
/// target's catch rate.
///
/// There is no `Default`: these values must be supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLevels {
    pub none: i32,
    pub sleep: i32,
    pub freeze: i32,
    pub paralyze: i32,
    pub burn: i32,
    pub poison: i32,
}

impl StatusLevels {
    /// The placeholder values used by the legacy game data, where every level is -1.
    // TODO: Replace with calibrated per-status levels once reference capture data is available.
    pub fn uncalibrated() -> Self {
        Self {
            none: -1,
            sleep: -1,
            freeze: -1,
            paralyze: -1,
            burn: -1,
            poison: -1,
        }
    }

    /// Looks up the level for the given status condition.
    pub fn get(&self, status: Option<Status>) -> i32 {
        match status {
            None => self.none,
            Some(Status::Sleep) => self.sleep,
            Some(Status::Freeze) => self.freeze,
            Some(Status::Paralyze) => self.paralyze,
            Some(Status::Burn) => self.burn,
            Some(Status::Poison) => self.poison,
        }
    }
}

/// Options for capture resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureOptions {
    /// Per-status levels.
    pub status_levels: StatusLevels,
}

impl CaptureOptions {
    /// Capture options with [`StatusLevels::uncalibrated`].
    pub fn uncalibrated() -> Self {
        Self {
            status_levels: StatusLevels::uncalibrated(),
        }
    }
}

/// Options for the opponent move selector.
///
/// Both flags default to the legacy behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiOptions {
    /// When a preference fails to match under its own kind, keep evaluating the same preference
    /// under every later kind in [`PreferenceKind::EVALUATION_ORDER`][`crate::PreferenceKind`].
    ///
    /// When `false`, each preference is only evaluated under its own kind.
    #[serde(default = "default_true")]
    pub switch_fallthrough: bool,
    /// Treat the type-membership half of super effective and not very effective preferences as
    /// always satisfied, so only the move's type is compared.
    ///
    /// When `false`, the target must actually have the preference's defending type.
    #[serde(default = "default_true")]
    pub legacy_type_membership: bool,
}

impl Default for AiOptions {
    fn default() -> Self {
        Self {
            switch_fallthrough: true,
            legacy_type_membership: true,
        }
    }
}

/// Options that change how the battle engine itself behaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Capture options.
    ///
    /// Required, since status levels have no safe default.
    pub capture: CaptureOptions,
    /// Opponent AI options.
    #[serde(default)]
    pub ai: AiOptions,
}

impl EngineOptions {
    /// Options matching the legacy game exactly.
    pub fn legacy() -> Self {
        Self {
            capture: CaptureOptions::uncalibrated(),
            ai: AiOptions::default(),
        }
    }

    /// Reads options from a JSON file.
    pub fn from_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path)
            .wrap_error_with_format(format_args!("failed to open {}", path.display()))?;
        serde_json::from_reader(file)
            .wrap_error_with_format(format_args!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod engine_options_test {
    use crate::{
        Status,
        config::{
            AiOptions,
            EngineOptions,
            StatusLevels,
        },
    };

    #[test]
    fn deserializes_with_default_ai_options() {
        let options: EngineOptions = serde_json::from_str(
            r#"{
                "capture": {
                    "status_levels": {
                        "none": 0,
                        "sleep": 10,
                        "freeze": 10,
                        "paralyze": 5,
                        "burn": 5,
                        "poison": 5
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(options.ai, AiOptions::default());
        assert_eq!(options.capture.status_levels.get(None), 0);
        assert_eq!(options.capture.status_levels.get(Some(Status::Sleep)), 10);
        assert_eq!(options.capture.status_levels.get(Some(Status::Burn)), 5);
    }

    #[test]
    fn requires_capture_options() {
        assert!(serde_json::from_str::<EngineOptions>(r#"{ "ai": {} }"#).is_err());
    }

    #[test]
    fn reads_partial_ai_options() {
        let options: EngineOptions = serde_json::from_value(serde_json::json!({
            "capture": { "status_levels": StatusLevels::uncalibrated() },
            "ai": { "switch_fallthrough": false },
        }))
        .unwrap();
        assert!(!options.ai.switch_fallthrough);
        assert!(options.ai.legacy_type_membership);
    }

    #[test]
    fn legacy_options_use_placeholder_levels() {
        let options = EngineOptions::legacy();
        for status in [
            None,
            Some(Status::Sleep),
            Some(Status::Freeze),
            Some(Status::Paralyze),
            Some(Status::Burn),
            Some(Status::Poison),
        ] {
            assert_eq!(options.capture.status_levels.get(status), -1);
        }
    }

    #[test]
    fn fails_for_missing_file() {
        let error = EngineOptions::from_file("/definitely/not/options.json")
            .err()
            .unwrap();
        assert!(error.to_string().contains("failed to open"));
    }
}
