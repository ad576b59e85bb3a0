//! Core domain types for the tic-tac-toe board.

use std::fmt;
use strum::IntoEnumIterator;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// The X mark (moves first).
    X,
    /// The O mark (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// One of the nine board cells, in row-major order.
///
/// Out-of-range indices are unrepresentable: [`Cell::from_index`] is the
/// only way in from untyped input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum Cell {
    /// Top-left (index 0).
    TopLeft,
    /// Top-center (index 1).
    TopCenter,
    /// Top-right (index 2).
    TopRight,
    /// Middle-left (index 3).
    MiddleLeft,
    /// Center (index 4).
    Center,
    /// Middle-right (index 5).
    MiddleRight,
    /// Bottom-left (index 6).
    BottomLeft,
    /// Bottom-center (index 7).
    BottomCenter,
    /// Bottom-right (index 8).
    BottomRight,
}

impl Cell {
    /// Creates a cell from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Cell::TopLeft),
            1 => Some(Cell::TopCenter),
            2 => Some(Cell::TopRight),
            3 => Some(Cell::MiddleLeft),
            4 => Some(Cell::Center),
            5 => Some(Cell::MiddleRight),
            6 => Some(Cell::BottomLeft),
            7 => Some(Cell::BottomCenter),
            8 => Some(Cell::BottomRight),
            _ => None,
        }
    }

    /// Returns the row-major index (0-8).
    pub fn index(self) -> usize {
        match self {
            Cell::TopLeft => 0,
            Cell::TopCenter => 1,
            Cell::TopRight => 2,
            Cell::MiddleLeft => 3,
            Cell::Center => 4,
            Cell::MiddleRight => 5,
            Cell::BottomLeft => 6,
            Cell::BottomCenter => 7,
            Cell::BottomRight => 8,
        }
    }

    /// Returns the row (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Returns the column (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Creates a cell from grid coordinates, or `None` when either
    /// coordinate falls off the board.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row > 2 || col > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The 3x3 board: nine cells, each empty or holding a mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    marks: [Option<Mark>; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self { marks: [None; 9] }
    }

    /// Returns the mark at the given cell, if any.
    pub fn mark(&self, cell: Cell) -> Option<Mark> {
        self.marks[cell.index()]
    }

    /// Checks whether the given cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.mark(cell).is_none()
    }

    /// Places a mark. The session is the only writer; it guarantees the
    /// cell was empty.
    pub(super) fn place(&mut self, cell: Cell, mark: Mark) {
        self.marks[cell.index()] = Some(mark);
    }

    /// Clears every cell.
    pub(super) fn clear(&mut self) {
        self.marks = [None; 9];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Compact single-line form for logs: `X..|.O.|..X`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in Cell::iter() {
            if cell.index() > 0 && cell.col() == 0 {
                f.write_str("|")?;
            }
            match self.mark(cell) {
                Some(Mark::X) => f.write_str("X")?,
                Some(Mark::O) => f.write_str("O")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
