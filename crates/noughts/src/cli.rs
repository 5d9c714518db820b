//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts_core::GameMode;

/// Noughts - tic-tac-toe with an unbeatable computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe in the terminal with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Override the mode from the settings file
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },

    /// Show board, outcome, and best move for a position
    Analyze {
        /// Moves so far, e.g. "0:0 1:1" or "X@0:0 O@1:1"
        #[arg(short, long, default_value = "")]
        moves: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the search play both sides to the end
    Selfplay {
        /// Starting moves, e.g. "0:0 1:1"
        #[arg(short, long, default_value = "")]
        moves: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { mode: None }
    }
}

/// Game mode as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two humans
    Human,
    /// Human against the computer
    Ai,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Human => GameMode::Human,
            ModeArg::Ai => GameMode::Ai,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["noughts"]).expect("parse");
        assert_eq!(cli.command.unwrap_or_default(), Command::Play { mode: None });
        assert_eq!(cli.config, std::path::PathBuf::from("noughts.toml"));
    }

    #[test]
    fn test_play_mode_flag() {
        let cli = Cli::try_parse_from(["noughts", "play", "--mode", "ai"]).expect("parse");
        assert_eq!(
            cli.command,
            Some(Command::Play {
                mode: Some(ModeArg::Ai)
            })
        );
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::try_parse_from(["noughts", "analyze", "--moves", "0:0 1:1", "--json"])
            .expect("parse");
        assert_eq!(
            cli.command,
            Some(Command::Analyze {
                moves: "0:0 1:1".to_string(),
                json: true,
            })
        );
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["noughts", "selfplay", "--config", "other.toml"])
            .expect("parse");
        assert_eq!(cli.config, std::path::PathBuf::from("other.toml"));
    }
}
