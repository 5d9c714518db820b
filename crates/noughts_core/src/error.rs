//! Diagnostics and error types.

use super::types::{Mark, Square};
use derive_more::Display;
use tracing::instrument;

/// A history entry the board deriver could not apply.
///
/// Non-fatal: the entry is skipped and derivation continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IntegrityWarning {
    /// The move's square is off the 3x3 board.
    #[display("move #{} targets {} which is off the board", index, square)]
    OutOfBounds {
        /// Position of the move in the history.
        index: usize,
        /// The offending square.
        square: Square,
    },

    /// The move's square already holds a mark.
    #[display("move #{} targets {} which already holds {}", index, square, existing)]
    Overwrite {
        /// Position of the move in the history.
        index: usize,
        /// The offending square.
        square: Square,
        /// The mark already in the cell.
        existing: Mark,
    },
}

impl std::error::Error for IntegrityWarning {}

/// Why a requested move was not recorded.
///
/// Rejections are no-ops: the session is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidInteraction {
    /// The game already ended.
    #[display("Game is already over")]
    GameOver,

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Square),

    /// The square is off the board.
    #[display("Square {} is off the board", _0)]
    OutOfBounds(Square),

    /// A human tried to move for the computer opponent.
    #[display("It's not your turn; {} is played by the computer", _0)]
    NotYourTurn(Mark),

    /// The search produced no playable square for the computer.
    #[display("Computer opponent could not find a move")]
    SearchFailed,
}

impl std::error::Error for InvalidInteraction {}

/// Malformed move notation.
#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
#[display("Notation error: {} at {}:{}", message, file, line)]
pub struct NotationError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl NotationError {
    /// Creates a new notation error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_messages() {
        let warning = IntegrityWarning::OutOfBounds {
            index: 2,
            square: Square::new(5, 5),
        };
        assert_eq!(warning.to_string(), "move #2 targets (5, 5) which is off the board");

        let warning = IntegrityWarning::Overwrite {
            index: 1,
            square: Square::new(0, 0),
            existing: Mark::X,
        };
        assert_eq!(warning.to_string(), "move #1 targets (0, 0) which already holds X");
    }

    #[test]
    fn test_interaction_messages() {
        assert_eq!(
            InvalidInteraction::SquareOccupied(Square::new(1, 1)).to_string(),
            "Square (1, 1) is already occupied"
        );
        assert_eq!(InvalidInteraction::GameOver.to_string(), "Game is already over");
    }

    #[test]
    fn test_notation_error_tracks_location() {
        let err = NotationError::new("bad token");
        assert_eq!(err.message, "bad token");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().starts_with("Notation error: bad token at "));
    }
}
