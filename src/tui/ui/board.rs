//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

use crate::tictactoe::{Board, Cell, Mark};

/// Renders the board with the cursor highlighted.
pub fn render_board(f: &mut Frame, area: Rect, board: &Board, cursor: Cell) {
    let board_area = center_rect(area, 40, 11);
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

    render_row(
        f,
        rows[0],
        board,
        cursor,
        [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    );
    render_separator(f, rows[1]);
    render_row(
        f,
        rows[2],
        board,
        cursor,
        [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    );
    render_separator(f, rows[3]);
    render_row(
        f,
        rows[4],
        board,
        cursor,
        [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    );
}

fn render_row(f: &mut Frame, area: Rect, board: &Board, cursor: Cell, cells: [Cell; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_cell(f, cols[0], board, cursor, cells[0]);
    render_vertical_sep(f, cols[1]);
    render_cell(f, cols[2], board, cursor, cells[1]);
    render_vertical_sep(f, cols[3]);
    render_cell(f, cols[4], board, cursor, cells[2]);
}

fn render_cell(f: &mut Frame, area: Rect, board: &Board, cursor: Cell, cell: Cell) {
    // Empty cells show their digit so keyboard input is discoverable.
    let (text, base_style) = match board.mark(cell) {
        None => (
            format!("{}", cell.index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Some(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cell == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
