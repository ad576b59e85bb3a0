//! Cursor movement for keyboard navigation.

use crate::tictactoe::Cell;
use crossterm::event::KeyCode;

/// Moves the cursor one cell in the arrow key's direction.
///
/// Movement clamps at the board edges instead of wrapping. Keys other
/// than the four arrows leave the cursor in place.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => return cursor,
    };
    // Down and Right step off the board at an edge; stay put there.
    Cell::from_row_col(row, col).unwrap_or(cursor)
}
