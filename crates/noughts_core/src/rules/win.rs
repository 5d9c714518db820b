//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Mark, Square};
use tracing::instrument;

/// Three squares that win when they all hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine(pub [Square; 3]);

impl WinningLine {
    /// The squares of this line.
    pub fn squares(&self) -> [Square; 3] {
        self.0
    }

    /// Returns true if `square` lies on this line.
    pub fn contains(&self, square: Square) -> bool {
        self.0.contains(&square)
    }

    /// Returns the mark owning every square of this line, if any.
    pub fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let first = board.get(a)?;
        (board.get(b) == Some(first) && board.get(c) == Some(first)).then_some(first)
    }
}

/// The eight winning lines in evaluation order: rows top to bottom, columns
/// left to right, then the two diagonals.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Square::new(0, 0), Square::new(0, 1), Square::new(0, 2)]),
    WinningLine([Square::new(1, 0), Square::new(1, 1), Square::new(1, 2)]),
    WinningLine([Square::new(2, 0), Square::new(2, 1), Square::new(2, 2)]),
    // Columns
    WinningLine([Square::new(0, 0), Square::new(1, 0), Square::new(2, 0)]),
    WinningLine([Square::new(0, 1), Square::new(1, 1), Square::new(2, 1)]),
    WinningLine([Square::new(0, 2), Square::new(1, 2), Square::new(2, 2)]),
    // Diagonals
    WinningLine([Square::new(0, 0), Square::new(1, 1), Square::new(2, 2)]),
    WinningLine([Square::new(0, 2), Square::new(1, 1), Square::new(2, 0)]),
];

/// Returns the first completed line and its owner.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(WinningLine, Mark)> {
    LINES
        .iter()
        .find_map(|line| line.owner(board).map(|mark| (*line, mark)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a line holds three of that mark, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(_, mark)| mark)
}
