//! Moves and the history they form.
//!
//! A move is a domain event: "this mark was placed at this square". The
//! history of moves is the single source of truth for a game; boards and
//! outcomes are always derived from it.

use super::types::{Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed at a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Where the mark was placed.
    pub square: Square,
    /// The mark that was placed.
    pub mark: Mark,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(square: Square, mark: Mark) -> Self {
        Self { square, mark }
    }

    /// Returns the square of this move.
    pub fn square(&self) -> Square {
        self.square
    }

    /// Returns the mark of this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.square)
    }
}

/// Ordered, append-only record of moves.
///
/// A history built through [`crate::GameSession`] always alternates marks
/// starting with X and never repeats a square. Histories built with
/// [`History::from_moves`] are taken as-is and may be malformed; the board
/// deriver skips entries it cannot apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    moves: Vec<Move>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing sequence of moves without validating it.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn from_moves(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    /// Returns the moves in play order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no move has been recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The most recent move, if any.
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Iterates over the moves in play order.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// The mark to move next, derived from the history length.
    pub fn active_mark(&self) -> Mark {
        Mark::for_turn(self.moves.len())
    }

    pub(crate) fn push(&mut self, action: Move) {
        self.moves.push(action);
    }

    pub(crate) fn clear(&mut self) {
        self.moves.clear();
    }
}

impl From<Vec<Move>> for History {
    fn from(moves: Vec<Move>) -> Self {
        Self::from_moves(moves)
    }
}

impl FromIterator<Move> for History {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self::from_moves(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_mark_follows_parity() {
        let mut history = History::new();
        assert_eq!(history.active_mark(), Mark::X);

        history.push(Move::new(Square::new(1, 1), Mark::X));
        assert_eq!(history.active_mark(), Mark::O);

        history.push(Move::new(Square::new(0, 0), Mark::O));
        assert_eq!(history.active_mark(), Mark::X);
    }

    #[test]
    fn test_clear_resets_to_x() {
        let mut history: History = vec![Move::new(Square::new(0, 0), Mark::X)].into();
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.active_mark(), Mark::X);
    }

    #[test]
    fn test_move_display() {
        let action = Move::new(Square::new(2, 1), Mark::O);
        assert_eq!(action.to_string(), "O -> (2, 1)");
    }

    #[test]
    fn test_history_serializes_as_list() {
        let history: History = vec![Move::new(Square::new(0, 2), Mark::X)].into();
        let json = serde_json::to_string(&history).expect("serialize");
        assert_eq!(json, r#"[{"square":{"row":0,"col":2},"mark":"X"}]"#);
    }
}
