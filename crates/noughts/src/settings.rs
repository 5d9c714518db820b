//! Settings file for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::SessionConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings loaded from `noughts.toml`.
///
/// ```toml
/// log_file = "noughts.log"
///
/// [session]
/// x_name = "Ada"
/// o_name = "Grace"
/// ai_name = "Deep Thought"
/// mode = "ai"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Initial names and mode.
    #[serde(default)]
    session: SessionConfig,

    /// Where the interactive UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// A missing file yields the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Settings file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            mode = %settings.session.mode(),
            log_file = %settings.log_file.display(),
            "Settings loaded"
        );
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            log_file: default_log_file(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
