//! TUI rendering with ratatui
//!
//! Draws the tile grid, the transient invalid-word notice, and the win/loss
//! banner with its new-game/try-again affordances.

use super::app::App;
use crate::core::{GameStatus, Row, TileState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(14), // Grid
            Constraint::Length(4),  // Messages
            Constraint::Length(3),  // Key hints
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    render_hints(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(app.board.rows().len() * 2);

    for row in app.board.rows() {
        lines.push(row_line(row));
        lines.push(Line::default()); // spacing between rows
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn row_line(row: &Row) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.tiles().len() * 2);

    for tile in row.tiles() {
        let letter = tile.letter().map_or(' ', |c| c.to_ascii_uppercase());
        spans.push(Span::styled(
            format!(" {letter} "),
            tile_style(tile.state()),
        ));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

fn tile_style(state: TileState) -> Style {
    match state {
        TileState::Empty => Style::default().fg(Color::DarkGray).bg(Color::Black),
        TileState::Occupied => Style::default()
            .fg(Color::White)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
        TileState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        TileState::WrongSpot => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TileState::Incorrect => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if app.board.invalid_word() {
        lines.push(Line::from(Span::styled(
            "Not in word list",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    match app.board.status() {
        GameStatus::Won => {
            let attempts = app.board.row_index() + 1;
            lines.push(Line::from(Span::styled(
                format!("You got it in {attempts}/6!"),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        GameStatus::Lost => {
            lines.push(Line::from(Span::styled(
                format!(
                    "Out of guesses! The word was {}",
                    app.board.target().text().to_uppercase()
                ),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
        GameStatus::InProgress => {}
    }

    let message = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(message, area);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    // New-game / try-again affordances only appear once the game is over
    let hints = if app.board.is_over() {
        "n: new word | r: try again | q: quit"
    } else {
        "type letters | Enter: submit | Backspace: delete | Esc: quit"
    };

    let status = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
