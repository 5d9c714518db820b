//! Non-interactive commands: position analysis and self-play.

use anyhow::{bail, Context, Result};
use noughts_core::{
    analyze_position, best_move, derive_checked, evaluate, parse_moves, Board, History, Mark,
    Move, Outcome, SearchReport,
};
use serde::Serialize;
use std::fmt::Write as _;
use tracing::{debug, info, instrument};

/// Everything known about one position.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Moves as given.
    pub moves: History,
    /// Board derived from the moves.
    pub board: Board,
    /// Entries the deriver skipped.
    pub skipped: Vec<String>,
    /// Outcome of the board.
    pub outcome: Outcome,
    /// Mark to move next.
    pub to_move: Mark,
    /// Search result for the mark to move, absent when the game is over.
    pub best: Option<SearchReport>,
}

/// Parses `moves` and analyzes the resulting position.
#[instrument]
pub fn analyze(moves: &str) -> Result<Analysis> {
    let history = parse_moves(moves).context("Invalid move list")?;
    let derivation = derive_checked(&history);
    let outcome = evaluate(&derivation.board);
    let to_move = history.active_mark();

    let best = if outcome.is_terminal() {
        None
    } else {
        let report = analyze_position(&derivation.board, to_move);
        info!(
            square = ?report.evaluation.square,
            score = report.evaluation.score,
            nodes = report.nodes,
            "Position analyzed"
        );
        Some(report)
    };

    Ok(Analysis {
        skipped: derivation.warnings.iter().map(ToString::to_string).collect(),
        board: derivation.board,
        moves: history,
        outcome,
        to_move,
        best,
    })
}

/// Renders an analysis as text or pretty JSON.
pub fn render_analysis(analysis: &Analysis, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(analysis).context("Failed to serialize analysis");
    }

    let mut out = String::new();
    writeln!(out, "{}", analysis.board.display())?;
    writeln!(out)?;
    for warning in &analysis.skipped {
        writeln!(out, "skipped: {}", warning)?;
    }
    writeln!(out, "Outcome: {}", analysis.outcome)?;
    match analysis.best {
        Some(report) => {
            writeln!(out, "To move: {}", analysis.to_move)?;
            match report.evaluation.square {
                Some(square) => writeln!(
                    out,
                    "Best move: {} {} (score {}, {} positions searched)",
                    square,
                    square.label(),
                    report.evaluation.score,
                    report.nodes
                )?,
                None => writeln!(out, "Best move: none")?,
            }
        }
        None => writeln!(out, "Game over")?,
    }
    Ok(out)
}

/// Plays the search against itself from `moves` to the end of the game.
///
/// Returns the full move list and the final outcome.
#[instrument]
pub fn selfplay(moves: &str) -> Result<(History, Outcome)> {
    let start = parse_moves(moves).context("Invalid move list")?;
    let mut played: Vec<Move> = start.moves().to_vec();
    let mut board = derive_checked(&start).board;

    while !evaluate(&board).is_terminal() {
        let to_move = Mark::for_turn(played.len());
        let Some(square) = best_move(&board, to_move) else {
            bail!("Search found no move on an unfinished board");
        };
        let action = Move::new(square, to_move);
        debug!(%action, "Self-play move");
        played.push(action);
        board = derive_checked(&History::from_moves(played.clone())).board;
    }

    let outcome = evaluate(&board);
    info!(%outcome, moves = played.len(), "Self-play finished");
    Ok((History::from_moves(played), outcome))
}

/// Renders a self-play game as one line per move followed by the final board.
pub fn render_selfplay(history: &History, outcome: Outcome) -> Result<String> {
    let mut out = String::new();
    for (number, action) in history.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {} {}",
            number + 1,
            action,
            action.square().label()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{}", derive_checked(history).board.display())?;
    writeln!(out)?;
    writeln!(out, "Outcome: {}", outcome)?;
    Ok(out)
}
