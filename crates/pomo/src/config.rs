//! User configuration for pomo.
//!
//! Loaded from `<config_dir>/pomo/config.toml` (e.g.
//! `~/.config/pomo/config.toml`) or an explicit `--config` path. Every key
//! is optional:
//!
//! ```toml
//! sound = true
//! tick_millis = 1000
//!
//! [durations]
//! focus = 25
//! short_break = 5
//! long_break = 15
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use pomo_core::DurationTable;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, TuiError};

/// Longest accepted tick period (one minute).
pub const MAX_TICK_MILLIS: u64 = 60_000;

/// Countdown lengths in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationMinutes {
    pub focus: u32,
    pub short_break: u32,
    pub long_break: u32,
}

impl Default for DurationMinutes {
    fn default() -> Self {
        Self {
            focus: 25,
            short_break: 5,
            long_break: 15,
        }
    }
}

/// Effective configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether the completion alert starts enabled.
    pub sound: bool,

    /// Milliseconds between countdown ticks. One second in normal use.
    pub tick_millis: u64,

    pub durations: DurationMinutes,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sound: true,
            tick_millis: 1000,
            durations: DurationMinutes::default(),
        }
    }
}

impl Config {
    /// Default config file location, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pomo").join("config.toml"))
    }

    /// Loads the configuration.
    ///
    /// With `path == None` the default location is used and a missing file
    /// yields the defaults. An explicit path must exist.
    ///
    /// # Errors
    ///
    /// - `TuiError::Config` if the file cannot be read or parsed, or
    ///   `tick_millis` is zero
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                Some(path) => {
                    debug!(path = %path.display(), "No config file, using defaults");
                    Ok(Self::default())
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// Reads and validates a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| config_error(path, &e))?;
        let config = Self::parse(&contents).map_err(|reason| TuiError::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parses TOML text into a validated config.
    fn parse(contents: &str) -> std::result::Result<Self, String> {
        let config: Self = toml::from_str(contents).map_err(|e| e.to_string())?;
        if config.tick_millis == 0 {
            return Err("tick_millis must be greater than zero".to_string());
        }
        if config.tick_millis > MAX_TICK_MILLIS {
            return Err(format!(
                "tick_millis must be at most {MAX_TICK_MILLIS}, got {}",
                config.tick_millis
            ));
        }
        Ok(config)
    }

    /// Builds the validated duration table.
    ///
    /// # Errors
    ///
    /// - `TuiError::Domain` if any duration is zero minutes
    pub fn duration_table(&self) -> Result<DurationTable> {
        let d = self.durations;
        Ok(DurationTable::from_minutes(d.focus, d.short_break, d.long_break)?)
    }

    /// Period between ticks, clamped to `1..=MAX_TICK_MILLIS`.
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis.clamp(1, MAX_TICK_MILLIS))
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn config_error(path: &Path, error: &io::Error) -> TuiError {
    TuiError::Config {
        path: path.to_path_buf(),
        reason: error.to_string(),
    }
}
