//! Configuration file loading with precedence handling.

use super::SelectionModifier;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "LETTERBOARD_CONFIG";

/// Environment variable overriding the selection modifier.
pub const MODIFIER_ENV_VAR: &str = "LETTERBOARD_SELECTION_MODIFIER";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Config file exists but could not be read.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// Every key is optional. Corresponds to `~/.config/letterboard/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Modifier that turns a click into a selection toggle.
    #[serde(default)]
    pub selection_modifier: Option<SelectionModifier>,

    /// Show the key hint status bar.
    #[serde(default)]
    pub show_hints: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Selection modifier.
    pub selection_modifier: SelectionModifier,
    /// Key hint status bar visibility.
    pub show_hints: bool,
    /// Log file path.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            selection_modifier: SelectionModifier::Ctrl,
            show_hints: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Default log file path.
///
/// `~/.local/state/letterboard/letterboard.log` on Linux, the platform
/// state directory elsewhere, `letterboard.log` when none exists.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("letterboard").join("letterboard.log"),
        None => PathBuf::from("letterboard.log"),
    }
}

/// Default config file path, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("letterboard").join("config.toml"))
}

/// Load a config file.
///
/// A missing file yields `Ok(None)`.
///
/// # Errors
///
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` (CLI `--config`)
/// 2. `LETTERBOARD_CONFIG` environment variable
/// 3. Default path
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.trim().is_empty() {
            return Err(ConfigError::InvalidPath(format!(
                "{CONFIG_ENV_VAR} is set but empty"
            )));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge a config file into defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        selection_modifier: config
            .selection_modifier
            .unwrap_or(defaults.selection_modifier),
        show_hints: config.show_hints.unwrap_or(defaults.show_hints),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// An environment override that was present but could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredOverride {
    /// Variable name.
    pub name: &'static str,
    /// Raw value found in the environment.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl IgnoredOverride {
    /// Emit the warning for this override.
    ///
    /// Call once logging is initialized; earlier events have no subscriber.
    pub fn report(&self) {
        warn!(value = %self.value, reason = %self.reason, "Ignoring {}", self.name);
    }
}

/// Apply environment variable overrides.
///
/// Values that cannot be parsed leave the config unchanged and are returned
/// so the caller can report them after logging starts.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> (ResolvedConfig, Vec<IgnoredOverride>) {
    let mut ignored = Vec::new();

    if let Ok(raw) = std::env::var(MODIFIER_ENV_VAR) {
        match raw.parse::<SelectionModifier>() {
            Ok(modifier) => config.selection_modifier = modifier,
            Err(err) => ignored.push(IgnoredOverride {
                name: MODIFIER_ENV_VAR,
                value: raw,
                reason: err.to_string(),
            }),
        }
    }

    (config, ignored)
}

/// Apply CLI overrides. Only flags the user actually passed are `Some`.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    modifier_override: Option<SelectionModifier>,
) -> ResolvedConfig {
    if let Some(modifier) = modifier_override {
        config.selection_modifier = modifier;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
