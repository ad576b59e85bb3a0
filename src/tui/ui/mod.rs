//! Widget layout for the game screen.

mod board;

use super::app::App;
use crate::tictactoe::GameSession;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;

/// Draws one frame: title bar, board, status line, key help.
pub fn draw(f: &mut Frame, app: &App) {
    let [title, board, status, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(f.area());

    render_title(f, title);
    render_board(f, board, app.session().board(), app.cursor());
    render_status(f, status, app.session());
    render_help(f, help);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("Termtoys - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

/// The status line reuses the session's own wording; the screen never
/// invents its own phrasing.
fn render_status(f: &mut Frame, area: Rect, session: &GameSession) {
    let status = Paragraph::new(session.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Arrows: Move | Enter/1-9: Place | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
