//! Game outcome and session phase.

use super::registry::PlayerRegistry;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// No line completed and at least one cell empty.
    #[display("In progress")]
    InProgress,
    /// A line holds three of this mark.
    #[display("{} wins", _0)]
    Win(Mark),
    /// Every cell filled and no line completed.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Human-facing summary using the players' display names.
    pub fn announce(&self, registry: &PlayerRegistry) -> String {
        match self {
            Outcome::InProgress => "Game in progress".to_string(),
            Outcome::Win(mark) => format!("{} won!", registry.name(*mark)),
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }
}

/// Lifecycle phase of a session, derived from its history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// No move recorded yet.
    Setup,
    /// At least one move recorded and no terminal outcome.
    #[display("In progress")]
    InProgress,
    /// Won or drawn; no further moves accepted.
    Terminal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Win(Mark::O).is_terminal());
        assert!(Outcome::Draw.is_terminal());
    }

    #[test]
    fn test_winner() {
        assert_eq!(Outcome::Win(Mark::X).winner(), Some(Mark::X));
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_announce_uses_names() {
        let mut registry = PlayerRegistry::default();
        registry.rename(Mark::X, "Ada");
        assert_eq!(Outcome::Win(Mark::X).announce(&registry), "Ada won!");
        assert_eq!(Outcome::Draw.announce(&registry), "It's a draw!");
    }

    #[test]
    fn test_display() {
        assert_eq!(Outcome::Win(Mark::O).to_string(), "O wins");
        assert_eq!(Phase::InProgress.to_string(), "In progress");
        assert_eq!(Phase::Setup.to_string(), "Setup");
    }
}
