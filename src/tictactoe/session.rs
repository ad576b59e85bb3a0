//! Mutable game session: turn order, terminal states, restart.
//!
//! The session owns the board and applies the full move pipeline:
//! validate, place, check win, check draw, toggle the player.

use super::rules;
use super::types::{Board, Cell, Mark};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// The phase a session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Moves are still being accepted.
    InProgress,
    /// The given mark completed a line.
    Won(Mark),
    /// The board filled with no winner.
    Draw,
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Cell),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// A single hot-seat game of tic-tac-toe.
///
/// X always moves first. After a terminal status only [`restart`]
/// changes the state.
///
/// [`restart`]: GameSession::restart
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    current_player: Mark,
    status: Status,
    history: Vec<Cell>,
}

impl GameSession {
    /// Creates a fresh session with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: Status::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next while the game is in progress.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the session status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the moves applied so far, oldest first.
    pub fn history(&self) -> &[Cell] {
        &self.history
    }

    /// Checks whether moves are still being accepted.
    pub fn is_active(&self) -> bool {
        self.status == Status::InProgress
    }

    /// Applies the current player's mark at the given cell.
    ///
    /// On success the status advances: `Won` if the move completed a
    /// line, `Draw` if it filled the board, otherwise `InProgress` with
    /// the turn passed to the opponent. The returned status is the one
    /// after the move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the session already ended and
    /// [`MoveError::CellOccupied`] if the cell holds a mark. The state
    /// is unchanged on error.
    #[instrument(skip(self), fields(cell = ?cell, player = ?self.current_player))]
    pub fn apply_move(&mut self, cell: Cell) -> Result<Status, MoveError> {
        if self.status != Status::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(cell) {
            return Err(MoveError::CellOccupied(cell));
        }

        let mover = self.current_player;
        self.board.place(cell, mover);
        self.history.push(cell);

        // Only the mover can have completed a line.
        if rules::winning_line(&self.board, mover) {
            self.status = Status::Won(mover);
        } else if rules::is_full(&self.board) {
            self.status = Status::Draw;
        } else {
            self.current_player = mover.opponent();
        }

        debug_assert_eq!(
            self.history.len(),
            Cell::iter().filter(|&c| self.board.mark(c).is_some()).count(),
            "history tracks every placed mark"
        );
        debug!(board = %self.board, status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Resets to a fresh session: empty board, X to move, in progress.
    ///
    /// Valid in any state.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.clear();
        self.current_player = Mark::X;
        self.status = Status::InProgress;
        self.history.clear();
        debug!("Session restarted");
    }

    /// Human-readable status line for display surfaces.
    pub fn status_line(&self) -> String {
        match self.status {
            Status::InProgress => format!("Player {}'s turn", self.current_player),
            Status::Won(mark) => format!("Player {mark} wins!"),
            Status::Draw => "Game ended in a draw!".to_string(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
