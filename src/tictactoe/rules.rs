//! Win and draw detection for tic-tac-toe.
//!
//! Pure functions over [`Board`], separated from session state so they
//! can be tested in isolation.

use super::types::{Board, Cell, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub(crate) const WINNING_LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Checks whether the given mark holds a complete line.
///
/// Only the mark that just moved can have completed a line, so callers
/// pass the mover rather than scanning for both.
#[instrument]
pub fn winning_line(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&cell| board.mark(cell) == Some(mark)))
}

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    Cell::iter().all(|cell| board.mark(cell).is_some())
}
