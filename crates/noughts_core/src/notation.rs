//! Text notation for move histories.
//!
//! Tokens are separated by whitespace or commas. Each token is either
//! `row:col`, whose mark is inferred from the token's position (X first), or
//! `M@row:col` with an explicit mark `X` or `O`. Coordinates are not range
//! checked here, so an off-board move survives parsing and is reported by the
//! board deriver instead.

use super::action::{History, Move};
use super::error::NotationError;
use super::types::{Mark, Square};
use std::str::FromStr;
use tracing::instrument;

/// Parses a move list into a history.
///
/// An empty string is an empty history.
#[instrument]
pub fn parse_moves(input: &str) -> Result<History, NotationError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| parse_token(index, token))
        .collect::<Result<Vec<_>, _>>()
        .map(History::from_moves)
}

/// Formats a history with explicit marks, e.g. `X@0:0 O@1:1`.
pub fn format_moves(history: &History) -> String {
    history
        .iter()
        .map(|action| format!("{}@{}:{}", action.mark, action.square.row, action.square.col))
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_token(index: usize, token: &str) -> Result<Move, NotationError> {
    let (mark, coords) = match token.split_once('@') {
        Some((mark, coords)) => {
            let mark = Mark::from_str(mark).map_err(|_| {
                NotationError::new(format!("unknown mark '{}' in token '{}'", mark, token))
            })?;
            (mark, coords)
        }
        None => (Mark::for_turn(index), token),
    };

    let (row, col) = coords.split_once(':').ok_or_else(|| {
        NotationError::new(format!("expected row:col in token '{}'", token))
    })?;

    let row = parse_coordinate(row, token)?;
    let col = parse_coordinate(col, token)?;
    Ok(Move::new(Square::new(row, col), mark))
}

fn parse_coordinate(text: &str, token: &str) -> Result<usize, NotationError> {
    text.parse::<usize>().map_err(|_| {
        NotationError::new(format!("invalid coordinate '{}' in token '{}'", text, token))
    })
}
