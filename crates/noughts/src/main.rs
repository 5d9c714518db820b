//! Noughts - tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::cli::{Cli, Command};
use noughts::{commands, tui, Settings};
use noughts_core::{GameMode, GameSession};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play { mode } => run_play(settings, mode.map(GameMode::from)),
        Command::Analyze { moves, json } => run_analyze(&moves, json),
        Command::Selfplay { moves } => run_selfplay(&moves),
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs to a file so output does not interfere with the terminal UI.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the interactive game
#[instrument(skip(settings))]
fn run_play(settings: Settings, mode: Option<GameMode>) -> Result<()> {
    init_file_logging(settings.log_file())?;

    let mut config = settings.session().clone();
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    info!(mode = %config.mode(), "Starting game");

    tui::run_tui(GameSession::new(config))
}

/// Print analysis of a position
fn run_analyze(moves: &str, json: bool) -> Result<()> {
    init_stderr_logging();
    let analysis = commands::analyze(moves)?;
    print!("{}", commands::render_analysis(&analysis, json)?);
    if json {
        println!();
    }
    Ok(())
}

/// Print a self-played game
fn run_selfplay(moves: &str) -> Result<()> {
    init_stderr_logging();
    let (history, outcome) = commands::selfplay(moves)?;
    print!("{}", commands::render_selfplay(&history, outcome)?);
    Ok(())
}
