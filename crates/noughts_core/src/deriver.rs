//! Folding a move history into a board.

use super::action::History;
use super::error::IntegrityWarning;
use super::types::Board;
use tracing::{debug, instrument, warn};

/// A derived board together with the entries that had to be skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    /// Board after applying every valid move in order.
    pub board: Board,
    /// One entry per skipped move, in history order.
    pub warnings: Vec<IntegrityWarning>,
}

impl Derivation {
    /// Returns true if every move was applied.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Derives the board for `history`, reporting skipped entries.
///
/// Starts from an empty grid and applies moves in order. A move that targets
/// a square off the board or one that is already occupied is skipped with a
/// warning; derivation always completes.
#[instrument(skip(history), fields(moves = history.len()))]
pub fn derive_checked(history: &History) -> Derivation {
    let mut board = Board::new();
    let mut warnings = Vec::new();

    for (index, action) in history.iter().enumerate() {
        let square = action.square;

        if !square.is_in_bounds() {
            let warning = IntegrityWarning::OutOfBounds { index, square };
            warn!(%warning, "Skipping move during board derivation");
            warnings.push(warning);
            continue;
        }

        if let Some(existing) = board.get(square) {
            let warning = IntegrityWarning::Overwrite {
                index,
                square,
                existing,
            };
            warn!(%warning, "Skipping move during board derivation");
            warnings.push(warning);
            continue;
        }

        board = board.with_mark(square, action.mark);
    }

    debug!(
        occupied = board.occupied(),
        skipped = warnings.len(),
        "Derived board"
    );

    Derivation { board, warnings }
}

/// Derives the board for `history`.
///
/// Equivalent to `derive_checked(history).board`; skipped entries are only logged.
pub fn derive_board(history: &History) -> Board {
    derive_checked(history).board
}
