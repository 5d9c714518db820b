//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Rules are separated from board storage so that the
//! search and the session can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line, WinningLine, LINES};

use super::phases::Outcome;
use super::types::Board;
use tracing::{instrument, trace};

/// Evaluates a board snapshot.
///
/// Lines are checked first, so a full board with a completed line is a win,
/// not a draw. Whether the marks on the board could have arisen from legal
/// play is not checked here.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    let outcome = if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };
    trace!(%outcome, "Evaluated board");
    outcome
}
