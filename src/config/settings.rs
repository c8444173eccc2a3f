//! Command processor settings - run timing and temp-file placement as
//! user-tunable TOML values.
//!
//! Each field defaults to the constant in `config::defaults`, so behaviour
//! is unchanged when no settings file is present.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;

/// Environment variable naming a settings file.
pub const SETTINGS_ENV_VAR: &str = "SOG_CONFIG";

/// Settings file looked for in the current directory.
pub const LOCAL_SETTINGS_FILE: &str = "sog.toml";

/// Load with `Settings::load()` which searches:
/// 1. `$SOG_CONFIG` env var
/// 2. `./sog.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// How often the batch scheduler checks running jobs
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// How often `sog run --watch` checks the outfile
    #[serde(default = "default_watch_interval_ms")]
    pub watch_interval_ms: u64,

    /// Niceness for batch jobs that set none
    #[serde(default = "default_nice")]
    pub default_nice: i32,

    /// Where temporary infiles go; the system temp dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_dir: Option<PathBuf>,
}

fn default_poll_interval_ms() -> u64 { defaults::BATCH_POLL_INTERVAL_MS }
fn default_watch_interval_ms() -> u64 { defaults::WATCH_INTERVAL_MS }
fn default_nice() -> i32 { defaults::DEFAULT_NICE }

impl Default for Settings {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            watch_interval_ms: default_watch_interval_ms(),
            default_nice: default_nice(),
            temp_dir: None,
        }
    }
}

impl Settings {
    /// Load settings using the standard search order:
    /// 1. `$SOG_CONFIG` environment variable
    /// 2. `./sog.toml` in the current working directory
    /// 3. Built-in defaults
    ///
    /// A file that fails to load is logged and skipped.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(SETTINGS_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(settings) => {
                        info!(path = %p.display(), "Loaded settings from {SETTINGS_ENV_VAR}");
                        return settings;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load settings from {SETTINGS_ENV_VAR}, falling back");
                    }
                }
            } else {
                warn!(path = %path, "{SETTINGS_ENV_VAR} points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from(LOCAL_SETTINGS_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(settings) => {
                    info!("Loaded settings from ./{LOCAL_SETTINGS_FILE}");
                    return settings;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{LOCAL_SETTINGS_FILE}, using defaults");
                }
            }
        }

        tracing::debug!("No settings file found, using built-in defaults");
        Self::default()
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|e| match e {
            SettingsError::Parse { source, .. } => SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse settings from TOML text, warning about unknown keys.
    pub fn from_toml(contents: &str) -> Result<Self, SettingsError> {
        for w in super::validation::validate_unknown_settings_keys(contents) {
            warn!("{w}");
        }
        let settings: Self = toml::from_str(contents).map_err(|source| SettingsError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(SettingsError::Serialize)
    }

    /// Check every value, collecting all problems before failing.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let mut errors = Vec::new();
        if self.poll_interval_ms == 0 {
            errors.push("poll_interval_ms must be > 0".to_string());
        }
        if self.watch_interval_ms == 0 {
            errors.push("watch_interval_ms must be > 0".to_string());
        }
        if !defaults::NICE_RANGE.contains(&self.default_nice) {
            errors.push(format!(
                "default_nice = {} is outside the range nice accepts ({}..={})",
                self.default_nice,
                defaults::NICE_RANGE.start(),
                defaults::NICE_RANGE.end()
            ));
        }
        if let Some(dir) = &self.temp_dir {
            if !dir.is_dir() {
                errors.push(format!("temp_dir {} is not a directory", dir.display()));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SettingsError::Validation(errors))
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn watch_interval(&self) -> Duration {
        Duration::from_millis(self.watch_interval_ms)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings I/O error ({}): {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },

    #[error("Settings parse error ({}): {source}", .path.display())]
    Parse { path: PathBuf, source: toml::de::Error },

    #[error("Settings serialization error: {0}")]
    Serialize(toml::ser::Error),

    #[error("Settings validation failed:\n{}", .0.iter().map(|e| format!("  - {e}")).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}
