//! Stateless UI rendering.

use super::app::App;
use noughts_core::{Mark, Square, WinningLine};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const HELP: &str = "arrows/hjkl move  enter/1-9 play  x/o rename  m mode  r restart  q quit";

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(30)])
        .split(frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(4),  // Players
            Constraint::Min(13),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Help
        ])
        .split(columns[0]);

    let session = app.session();
    let title = Paragraph::new(format!("Noughts - {}", session.mode().label()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_players(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    let outcome = session.outcome();
    let status_style = if outcome.is_terminal() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status_title = if outcome.is_terminal() { "Game over" } else { "Status" };
    let status = Paragraph::new(app.status())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(status_title));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    draw_log(frame, columns[1], app);
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let active = (!session.outcome().is_terminal()).then(|| session.active_mark());

    let lines: Vec<Line> = [Mark::X, Mark::O]
        .into_iter()
        .map(|mark| {
            let name = match app.editing() {
                Some(edit) if edit.mark() == mark => format!("{}_", edit.buffer()),
                _ => session.registry().name(mark).to_string(),
            };
            let suffix = if session.is_computer(mark) { " (computer)" } else { "" };
            let style = if active == Some(mark) {
                mark_style(mark).add_modifier(Modifier::REVERSED)
            } else {
                mark_style(mark)
            };
            Line::from(vec![
                Span::styled(format!(" {} ", mark), style),
                Span::raw(format!(" {}{}", name, suffix)),
            ])
        })
        .collect();

    let players = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Players"));
    frame.render_widget(players, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);
    let line = app.session().winning_line();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, line, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, line: Option<WinningLine>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], app, line, Square::new(row, col));
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, line: Option<WinningLine>, square: Square) {
    let (symbol, base_style) = match app.session().board().get(square) {
        None => {
            let hint = square.index().map(|i| format!(" {} ", i + 1)).unwrap_or_default();
            (hint, Style::default().fg(Color::DarkGray))
        }
        Some(mark) => (format!(" {} ", mark), mark_style(mark)),
    };

    let style = if square == app.cursor() && app.editing().is_none() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if line.is_some_and(|l| l.contains(square)) {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_log(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app.log_lines().into_iter().map(ListItem::new).collect();
    let log = List::new(items).block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(log, area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{GameMode, GameSession};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 26)).expect("terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_screen_shows_names_and_log() {
        let mut app = App::new(GameSession::with_mode(GameMode::Ai));
        app.handle_key(crossterm::event::KeyCode::Char('1'));
        let screen = render(&app);
        assert!(screen.contains("Player vs AI"));
        assert!(screen.contains("Player 1"));
        assert!(screen.contains("AI (computer)"));
        assert!(screen.contains("O selected Center"));
    }
}
