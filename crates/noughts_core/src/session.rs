//! Game session: history, mode, and player names for one board.
//!
//! The session stores only the move history, the mode, and the names.
//! Board, outcome, active mark, and phase are recomputed from the history on
//! every read, so what is displayed can never drift from what was played.

use super::action::{History, Move};
use super::config::{GameMode, SessionConfig};
use super::deriver::derive_board;
use super::error::InvalidInteraction;
use super::phases::{Outcome, Phase};
use super::registry::PlayerRegistry;
use super::rules::{evaluate, winning_line, WinningLine};
use super::search::best_move;
use super::types::{Board, Mark, Square};
use tracing::{debug, error, info, instrument, warn};

/// The mark the computer plays in [`GameMode::Ai`].
pub const AI_MARK: Mark = Mark::O;

/// One game between two players, with an optional computer opponent.
#[derive(Debug, Clone)]
pub struct GameSession {
    history: History,
    mode: GameMode,
    registry: PlayerRegistry,
    config: SessionConfig,
}

impl GameSession {
    /// Creates a session from configuration.
    #[instrument(skip(config), fields(mode = %config.mode()))]
    pub fn new(config: SessionConfig) -> Self {
        let mode = *config.mode();
        let registry = PlayerRegistry::new(config.x_name().clone(), config.o_name_for(mode));
        info!(x = %registry.x(), o = %registry.o(), "Creating game session");
        Self {
            history: History::new(),
            mode,
            registry,
            config,
        }
    }

    /// Creates a session with default names in the given mode.
    pub fn with_mode(mode: GameMode) -> Self {
        Self::new(SessionConfig::new(mode))
    }

    /// The recorded moves.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Player names.
    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    /// Board derived from the history.
    pub fn board(&self) -> Board {
        derive_board(&self.history)
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board())
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.board()).map(|(line, _)| line)
    }

    /// Mark to move next (X after an even number of moves, O after an odd).
    pub fn active_mark(&self) -> Mark {
        self.history.active_mark()
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        if self.outcome().is_terminal() {
            Phase::Terminal
        } else if self.history.is_empty() {
            Phase::Setup
        } else {
            Phase::InProgress
        }
    }

    /// Returns true if the computer plays `mark` in the current mode.
    pub fn is_computer(&self, mark: Mark) -> bool {
        self.mode == GameMode::Ai && mark == AI_MARK
    }

    /// Records a human move at `square` for the active mark.
    ///
    /// In AI mode the computer's reply is recorded before this returns. On
    /// `Err` nothing changed.
    #[instrument(skip(self), fields(mode = %self.mode, moves = self.history.len()))]
    pub fn record_move(&mut self, square: Square) -> Result<(), InvalidInteraction> {
        let active = self.active_mark();
        if self.is_computer(active) {
            let rejection = InvalidInteraction::NotYourTurn(active);
            warn!(%rejection, "Ignoring move");
            return Err(rejection);
        }

        self.apply(square)?;
        self.advance_computer();
        Ok(())
    }

    /// Switches mode and starts a new game.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn set_mode(&mut self, mode: GameMode) {
        info!(to = %mode, "Changing game mode");
        self.mode = mode;
        let o_name = self.config.o_name_for(mode).to_string();
        self.registry.rename(Mark::O, o_name);
        self.history.clear();
        self.advance_computer();
    }

    /// Starts a new game, keeping names and mode.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.history.clear();
        self.advance_computer();
    }

    /// Renames the player using `mark`. Has no effect on play.
    #[instrument(skip(self, name))]
    pub fn rename_player(&mut self, mark: Mark, name: impl Into<String>) {
        self.registry.rename(mark, name);
    }

    /// Validates and appends a move for the active mark.
    fn apply(&mut self, square: Square) -> Result<(), InvalidInteraction> {
        let board = self.board();
        let rejection = if evaluate(&board).is_terminal() {
            Some(InvalidInteraction::GameOver)
        } else if !square.is_in_bounds() {
            Some(InvalidInteraction::OutOfBounds(square))
        } else if !board.is_empty(square) {
            Some(InvalidInteraction::SquareOccupied(square))
        } else {
            None
        };

        if let Some(rejection) = rejection {
            warn!(%square, %rejection, "Ignoring move");
            return Err(rejection);
        }

        let action = Move::new(square, self.active_mark());
        self.history.push(action);
        debug!(%action, moves = self.history.len(), "Recorded move");

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
        }
        Ok(())
    }

    /// Plays the computer's move while it is the computer's turn.
    ///
    /// After one computer move it is X's turn again, so this records at most
    /// one move per call.
    fn advance_computer(&mut self) {
        while self.is_computer(self.active_mark()) && !self.outcome().is_terminal() {
            let board = self.board();
            let Some(square) = best_move(&board, AI_MARK) else {
                error!(
                    rejection = %InvalidInteraction::SearchFailed,
                    "Search returned no move on an in-progress board"
                );
                return;
            };
            if let Err(rejection) = self.apply(square) {
                error!(%square, %rejection, "Search returned an unplayable square");
                return;
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
