//! Session configuration.

use super::registry::{DEFAULT_AI_NAME, DEFAULT_O_NAME, DEFAULT_X_NAME};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who plays O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    Human,
    /// A human plays X against the computer playing O.
    Ai,
}

impl GameMode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Human => "Player vs Player",
            GameMode::Ai => "Player vs AI",
        }
    }

    /// Toggles between `Human` and `Ai`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            GameMode::Human => GameMode::Ai,
            GameMode::Ai => GameMode::Human,
        }
    }
}

/// Initial names and mode for a [`crate::GameSession`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name shown for X.
    #[serde(default = "default_x_name")]
    x_name: String,

    /// Name shown for O when a human plays it.
    #[serde(default = "default_o_name")]
    o_name: String,

    /// Name shown for O when the computer plays it.
    #[serde(default = "default_ai_name")]
    ai_name: String,

    /// Mode the session starts in.
    #[serde(default)]
    mode: GameMode,
}

fn default_x_name() -> String {
    DEFAULT_X_NAME.to_string()
}

fn default_o_name() -> String {
    DEFAULT_O_NAME.to_string()
}

fn default_ai_name() -> String {
    DEFAULT_AI_NAME.to_string()
}

impl SessionConfig {
    /// Creates a configuration with default names and the given mode.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Replaces the starting mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the human names.
    pub fn with_names(mut self, x_name: impl Into<String>, o_name: impl Into<String>) -> Self {
        self.x_name = x_name.into();
        self.o_name = o_name.into();
        self
    }

    /// Replaces the computer opponent's name.
    pub fn with_ai_name(mut self, ai_name: impl Into<String>) -> Self {
        self.ai_name = ai_name.into();
        self
    }

    /// Name O should carry in `mode`.
    pub fn o_name_for(&self, mode: GameMode) -> &str {
        match mode {
            GameMode::Human => &self.o_name,
            GameMode::Ai => &self.ai_name,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            x_name: default_x_name(),
            o_name: default_o_name(),
            ai_name: default_ai_name(),
            mode: GameMode::default(),
        }
    }
}
