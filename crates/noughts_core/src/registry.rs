//! Display names for the two marks.

use super::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Default display name for X.
pub const DEFAULT_X_NAME: &str = "Player 1";

/// Default display name for O in a two-human game.
pub const DEFAULT_O_NAME: &str = "Player 2";

/// Default display name for the computer opponent.
pub const DEFAULT_AI_NAME: &str = "AI";

/// Maps each mark to a human-facing name.
///
/// Names only affect labels; game logic never reads them.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerRegistry {
    /// Name shown for X.
    x: String,
    /// Name shown for O.
    o: String,
}

impl PlayerRegistry {
    /// Creates a registry with the given names.
    #[instrument(skip(x, o))]
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Returns the name for `mark`.
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Renames the player using `mark`.
    #[instrument(skip(self, name))]
    pub fn rename(&mut self, mark: Mark, name: impl Into<String>) {
        let name = name.into();
        info!(%mark, name = %name, "Renaming player");
        match mark {
            Mark::X => self.x = name,
            Mark::O => self.o = name,
        }
    }
}

impl Default for PlayerRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_X_NAME, DEFAULT_O_NAME)
    }
}
