//! Application state and key handling.

use super::input::{digit_square, move_cursor};
use crossterm::event::KeyCode;
use noughts_core::{GameSession, Mark, Square};
use tracing::{debug, info, instrument};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// A player name being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEdit {
    mark: Mark,
    buffer: String,
}

impl NameEdit {
    /// The mark whose name is being edited.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Text typed so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Square,
    status: String,
    editing: Option<NameEdit>,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            cursor: Square::new(1, 1),
            status: String::new(),
            editing: None,
        };
        app.refresh_status();
        app
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor square.
    pub fn cursor(&self) -> Square {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Gets the name edit in progress, if any.
    pub fn editing(&self) -> Option<&NameEdit> {
        self.editing.as_ref()
    }

    /// Move log lines, newest first.
    pub fn log_lines(&self) -> Vec<String> {
        self.session
            .history()
            .iter()
            .rev()
            .map(|action| format!("{} selected {}", action.mark(), action.square().label()))
            .collect()
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        if self.editing.is_some() {
            self.handle_edit_key(key);
            return Control::Continue;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("Quit requested");
                return Control::Quit;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char('r') => {
                self.session.restart();
                self.refresh_status();
            }
            KeyCode::Char('m') => {
                let mode = self.session.mode().toggle();
                self.session.set_mode(mode);
                self.status = format!("Switched to {}. {}", mode.label(), self.turn_message());
            }
            KeyCode::Char('x') => self.start_edit(Mark::X),
            KeyCode::Char('o') => self.start_edit(Mark::O),
            other => {
                if let Some(square) = digit_square(other) {
                    self.cursor = square;
                    self.play(square);
                } else {
                    self.cursor = move_cursor(self.cursor, other);
                }
            }
        }
        Control::Continue
    }

    fn play(&mut self, square: Square) {
        match self.session.record_move(square) {
            Ok(()) => self.refresh_status(),
            Err(rejection) => self.status = rejection.to_string(),
        }
    }

    fn start_edit(&mut self, mark: Mark) {
        debug!(%mark, "Editing player name");
        self.editing = Some(NameEdit {
            mark,
            buffer: self.session.registry().name(mark).to_string(),
        });
        self.status = format!("Editing {}'s name. Enter saves, Esc cancels.", mark);
    }

    fn handle_edit_key(&mut self, key: KeyCode) {
        let Some(edit) = self.editing.as_mut() else {
            return;
        };
        match key {
            KeyCode::Char(c) => edit.buffer.push(c),
            KeyCode::Backspace => {
                edit.buffer.pop();
            }
            KeyCode::Enter => {
                let name = edit.buffer.trim().to_string();
                let mark = edit.mark;
                self.editing = None;
                if !name.is_empty() {
                    self.session.rename_player(mark, name);
                }
                self.refresh_status();
            }
            KeyCode::Esc => {
                self.editing = None;
                self.refresh_status();
            }
            _ => {}
        }
    }

    fn turn_message(&self) -> String {
        let outcome = self.session.outcome();
        if outcome.is_terminal() {
            format!(
                "{} Press 'r' to restart or 'q' to quit.",
                outcome.announce(self.session.registry())
            )
        } else {
            let mark = self.session.active_mark();
            format!("{}'s turn ({})", self.session.registry().name(mark), mark)
        }
    }

    fn refresh_status(&mut self) {
        self.status = self.turn_message();
    }
}
