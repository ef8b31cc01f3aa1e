// src/mapping.rs
use std::fmt;
use thiserror::Error;

pub const LEGACY_KEY: &str = "PresentWindows";
pub const NEW_KEY: &str = "ClickBehavior";

/// What a click on a window in the desktop grid does.
///
/// Replaces the old boolean `PresentWindows` setting: `true` used to mean
/// "activate the window", `false` meant "show the desktop".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickBehavior {
    ActivateWindow,
    ShowDesktop,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized PresentWindows value '{value}', expected 'true' or 'false'")]
pub struct UnrecognizedValue {
    pub value: String,
}

impl ClickBehavior {
    /// Maps the legacy token. The match is exact, `True` or ` true` are rejected.
    pub fn from_legacy(value: &str) -> Result<Self, UnrecognizedValue> {
        match value {
            "true" => Ok(ClickBehavior::ActivateWindow),
            "false" => Ok(ClickBehavior::ShowDesktop),
            other => Err(UnrecognizedValue {
                value: other.to_string(),
            }),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ClickBehavior::ActivateWindow => 0,
            ClickBehavior::ShowDesktop => 1,
        }
    }
}

impl fmt::Display for ClickBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", NEW_KEY, self.code())
    }
}
