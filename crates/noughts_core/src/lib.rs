//! Tic-tac-toe game logic with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **History**: the ordered list of moves is the only stored game state
//! - **Deriver**: folds a history into a [`Board`], skipping bad entries
//! - **Rules**: win and draw detection over the eight fixed lines
//! - **Search**: full-depth minimax choosing the computer's move
//! - **Session**: mode, names, and history for one game, with the computer
//!   replying synchronously in [`GameMode::Ai`]
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameMode, GameSession, Mark, Outcome, Square};
//!
//! let mut session = GameSession::with_mode(GameMode::Ai);
//! session.record_move(Square::new(0, 0)).unwrap();
//!
//! // The computer has already answered in the center.
//! assert_eq!(session.board().get(Square::new(1, 1)), Some(Mark::O));
//! assert_eq!(session.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod deriver;
mod error;
mod notation;
mod phases;
mod registry;
mod search;
mod session;
mod types;

pub mod rules;

pub use action::{History, Move};
pub use config::{GameMode, SessionConfig};
pub use deriver::{derive_board, derive_checked, Derivation};
pub use error::{IntegrityWarning, InvalidInteraction, NotationError};
pub use notation::{format_moves, parse_moves};
pub use phases::{Outcome, Phase};
pub use registry::{PlayerRegistry, DEFAULT_AI_NAME, DEFAULT_O_NAME, DEFAULT_X_NAME};
pub use rules::{evaluate, WinningLine};
pub use search::{analyze_position, best_move, Evaluation, SearchReport, DRAW_SCORE, WIN_SCORE};
pub use session::{GameSession, AI_MARK};
pub use types::{Board, Mark, Square, BOARD_SIZE, CELL_COUNT};
