//! Configuration
//!
//! - `OverlayOptions`: what a host passes when attaching an overlay
//! - `Config`: the CLI's TOML file (overlay options, simulated media,
//!   playback driver settings)

mod error;
mod options;

pub use error::ConfigError;
pub use options::{lenient_flag, lenient_seconds, parse_seconds, IntoSeconds, OverlayOptions};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::offset::TimeRange;

/// What the playback driver does when the player handle is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultPolicy {
    /// Stop and report the fault
    #[default]
    Abort,
    /// Rebuild the player and overlay from configuration and keep going
    Reload,
}

/// Simulated media behind the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MediaConfig {
    /// Natural duration of the media in seconds
    pub duration: f64,
    /// Treat the media as a growing live stream
    pub live: bool,
    /// Buffered spans in media time, as `[start, end]` pairs
    pub buffered: Vec<TimeRange>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            duration: 120.0,
            live: false,
            buffered: Vec::new(),
        }
    }
}

/// A scheduled `set_offset` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OffsetChange {
    /// Tick at which the window moves (before the player advances)
    pub at_tick: u32,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub start: f64,
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub end: f64,
}

/// Playback driver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Seconds of media between two time-updates
    pub tick: f64,
    /// Maximum number of time-updates to deliver
    pub ticks: u32,
    /// Invalidate the player handle at this tick
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault_at_tick: Option<u32>,
    pub on_fault: FaultPolicy,
    pub offset_changes: Vec<OffsetChange>,
}

impl SimulationConfig {
    /// Check values serde cannot constrain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tick.is_finite() || self.tick <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "simulation.tick",
                reason: format!("must be a finite number of seconds above 0, got {}", self.tick),
            });
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick: 0.25,
            ticks: 480,
            fault_at_tick: None,
            on_fault: FaultPolicy::Abort,
            offset_changes: Vec::new(),
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub offset: OverlayOptions,
    pub media: MediaConfig,
    pub simulation: SimulationConfig,
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("clipoffset").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from `path`, or the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };

        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config =
            Self::from_toml(&content).map_err(|source| ConfigError::Parse { path, source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the parts of the config that must hold before playback.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()
    }

    /// Parse TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
