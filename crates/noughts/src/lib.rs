//! Noughts - terminal tic-tac-toe front end.
//!
//! Wraps [`noughts_core`] with a settings file, a command-line interface,
//! non-interactive analysis commands, and a ratatui game screen.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod settings;
pub mod tui;

pub use settings::{ConfigError, Settings};
