//! Exhaustive minimax search for the computer opponent.
//!
//! The search walks every legal continuation to the end of the game. There is
//! no pruning and no transposition table; a 3x3 board has at most 9! move
//! orders and most branches stop early on a win.
//!
//! Scores are taken from the maximizing mark's point of view: [`WIN_SCORE`]
//! when it completes a line, `-WIN_SCORE` when its opponent does, and 0 for a
//! draw. Scores are not discounted by depth, so a slow forced win is worth the
//! same as an immediate one. Among equally scored moves the first empty
//! square in row-major order is chosen.

use super::rules::check_winner;
use super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position won by the maximizing mark.
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Value of a position and the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Best square for the side to move, or `None` if the position is
    /// already terminal.
    pub square: Option<Square>,
    /// Game value under perfect play, from the maximizer's point of view.
    pub score: i32,
}

/// Result of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Value and chosen move at the root.
    pub evaluation: Evaluation,
    /// Positions visited, root included.
    pub nodes: u64,
}

/// Searches `board` with `maximizer` to move.
///
/// The caller must make sure the position is still in progress. On a
/// terminal board the report carries no square.
#[instrument(skip(board), fields(occupied = board.occupied()))]
pub fn analyze_position(board: &Board, maximizer: Mark) -> SearchReport {
    let mut nodes = 0;
    let evaluation = minimax(board, maximizer, maximizer, &mut nodes);
    debug!(
        square = ?evaluation.square,
        score = evaluation.score,
        nodes,
        "Search finished"
    );
    SearchReport { evaluation, nodes }
}

/// Returns the optimal square for `maximizer`, who is to move on `board`.
///
/// `None` means there is no empty square or the game is already decided.
pub fn best_move(board: &Board, maximizer: Mark) -> Option<Square> {
    analyze_position(board, maximizer).evaluation.square
}

fn minimax(board: &Board, maximizer: Mark, to_move: Mark, nodes: &mut u64) -> Evaluation {
    *nodes += 1;

    if let Some(winner) = check_winner(board) {
        let score = if winner == maximizer { WIN_SCORE } else { -WIN_SCORE };
        return Evaluation {
            square: None,
            score,
        };
    }

    let maximizing = to_move == maximizer;
    let mut best: Option<(Square, i32)> = None;

    for square in board.empty_squares() {
        let child = board.with_mark(square, to_move);
        let score = minimax(&child, maximizer, to_move.opponent(), nodes).score;

        let improves = match best {
            None => true,
            Some((_, current)) if maximizing => score > current,
            Some((_, current)) => score < current,
        };
        if improves {
            best = Some((square, score));
        }
    }

    match best {
        Some((square, score)) => Evaluation {
            square: Some(square),
            score,
        },
        // Full board, no line.
        None => Evaluation {
            square: None,
            score: DRAW_SCORE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::evaluate;
    use crate::phases::Outcome;
    use crate::types::board_from_rows;

    #[test]
    fn test_takes_immediate_win() {
        // O to move; (1,2) completes the middle row, every other move loses
        // or only draws.
        let board = board_from_rows(["XX.", "OO.", "X.."]);
        let report = analyze_position(&board, Mark::O);
        assert_eq!(report.evaluation.square, Some(Square::new(1, 2)));
        assert_eq!(report.evaluation.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_only_non_losing_square() {
        // X threatens the anti-diagonal at (2,0).
        let board = board_from_rows(["XOX", "OXX", "..O"]);
        assert_eq!(best_move(&board, Mark::O), Some(Square::new(2, 0)));
    }

    #[test]
    fn test_tie_prefers_first_square_even_over_faster_win() {
        // O wins at once on (2,2), but (1,0) forks and also forces a win.
        // With no depth discount both score +10 and (1,0) comes first.
        let board = board_from_rows(["OXX", ".O.", "X.."]);
        let report = analyze_position(&board, Mark::O);
        assert_eq!(report.evaluation.score, WIN_SCORE);
        assert_eq!(report.evaluation.square, Some(Square::new(1, 0)));
    }

    #[test]
    fn test_center_is_only_safe_reply_to_corner() {
        let board = board_from_rows(["X..", "...", "..."]);
        let report = analyze_position(&board, Mark::O);
        assert_eq!(report.evaluation.square, Some(Square::new(1, 1)));
        assert_eq!(report.evaluation.score, DRAW_SCORE);
    }

    #[test]
    fn test_empty_board_is_a_draw_and_picks_first_square() {
        let report = analyze_position(&Board::new(), Mark::X);
        assert_eq!(report.evaluation.score, DRAW_SCORE);
        assert_eq!(report.evaluation.square, Some(Square::new(0, 0)));
        assert!(report.nodes > 1);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = board_from_rows(["XXX", "OO.", "..."]);
        let report = analyze_position(&won, Mark::O);
        assert_eq!(report.evaluation.square, None);
        assert_eq!(report.evaluation.score, -WIN_SCORE);
        assert_eq!(report.nodes, 1);

        let drawn = board_from_rows(["XOX", "XOO", "OXX"]);
        assert_eq!(best_move(&drawn, Mark::O), None);
    }

    #[test]
    fn test_search_does_not_modify_input() {
        let board = board_from_rows(["X..", ".O.", "..X"]);
        let before = board;
        let _ = best_move(&board, Mark::O);
        assert_eq!(board, before);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let board = board_from_rows(["X..", "...", "..O"]);
        let first = analyze_position(&board, Mark::X);
        let second = analyze_position(&board, Mark::X);
        assert_eq!(first, second);
    }

    #[test]
    fn test_self_play_from_empty_board_draws() {
        let mut board = Board::new();
        let mut to_move = Mark::X;
        while evaluate(&board) == Outcome::InProgress {
            let square = best_move(&board, to_move).expect("move available");
            assert!(board.is_empty(square));
            board = board.with_mark(square, to_move);
            to_move = to_move.opponent();
        }
        assert_eq!(evaluate(&board), Outcome::Draw);
    }
}
