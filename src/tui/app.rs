//! Application state and logic.

use crate::tictactoe::{Cell, GameSession};
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::input;

/// Main application state: the game session plus the board cursor.
pub struct App {
    session: GameSession,
    cursor: Cell,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            cursor: Cell::Center,
        }
    }

    /// Gets the current game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor cell.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Handles a key press: arrows move the cursor, Enter or Space
    /// places at the cursor, digits 1-9 place directly.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.try_move(self.cursor);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10) {
                    let pos = digit as usize;
                    if pos >= 1 && let Some(cell) = Cell::from_index(pos - 1) {
                        self.try_move(cell);
                    }
                }
            }
            _ => {}
        }
    }

    /// Restarts the game and recenters the cursor.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.restart();
        self.cursor = Cell::Center;
    }

    /// Applies a move, ignoring rejections. Occupied cells and finished
    /// games leave the board untouched; the status line already tells
    /// the player what is going on.
    fn try_move(&mut self, cell: Cell) {
        match self.session.apply_move(cell) {
            Ok(status) => debug!(cell = %cell, status = ?status, "Move accepted"),
            Err(e) => debug!(cell = %cell, reason = %e, "Move ignored"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
