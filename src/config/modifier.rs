//! Modifier key that turns a letter click into a selection toggle.

use crossterm::event::KeyModifiers;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which modifier must be held for a click to toggle selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SelectionModifier {
    /// Control key.
    #[default]
    Ctrl,
    /// Alt / Option key.
    Alt,
    /// Shift key.
    Shift,
}

/// Unrecognized modifier name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown selection modifier: {0:?} (expected ctrl, alt or shift)")]
pub struct InvalidModifier(pub String);

impl SelectionModifier {
    /// Whether this modifier is among `modifiers`.
    pub fn is_held(self, modifiers: KeyModifiers) -> bool {
        modifiers.contains(self.as_key_modifiers())
    }

    /// Matching crossterm flag.
    pub fn as_key_modifiers(self) -> KeyModifiers {
        match self {
            Self::Ctrl => KeyModifiers::CONTROL,
            Self::Alt => KeyModifiers::ALT,
            Self::Shift => KeyModifiers::SHIFT,
        }
    }

    /// Label used in key hints.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ctrl => "Ctrl",
            Self::Alt => "Alt",
            Self::Shift => "Shift",
        }
    }
}

impl fmt::Display for SelectionModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SelectionModifier {
    type Err = InvalidModifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Ok(Self::Ctrl),
            "alt" | "option" => Ok(Self::Alt),
            "shift" => Ok(Self::Shift),
            _ => Err(InvalidModifier(s.to_string())),
        }
    }
}
