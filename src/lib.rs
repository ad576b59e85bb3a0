//! Termtoys library - small terminal toys
//!
//! Two self-contained components behind one CLI:
//!
//! - **Password**: configurable password generation with optional
//!   clipboard hand-off
//! - **Tic-tac-toe**: a hot-seat game engine with a ratatui front end
//!
//! # Examples
//!
//! Drive a game to a win:
//!
//! ```
//! use termtoys::{Cell, GameSession, Mark, Status};
//!
//! let mut session = GameSession::new();
//! session.apply_move(Cell::TopLeft)?; // X
//! session.apply_move(Cell::Center)?; // O
//! session.apply_move(Cell::TopCenter)?; // X
//! session.apply_move(Cell::MiddleLeft)?; // O
//! let status = session.apply_move(Cell::TopRight)?; // X completes the top row
//! assert_eq!(status, Status::Won(Mark::X));
//! # Ok::<(), termtoys::MoveError>(())
//! ```
//!
//! Generate a password:
//!
//! ```
//! use termtoys::{PasswordConfig, generate};
//!
//! let config = PasswordConfig::new(12, true, true, false);
//! let password = generate(&config, &mut rand::rng());
//! assert_eq!(password.len(), 12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod password;
mod tictactoe;
mod tui;

// Crate-level exports - Command-line interface
pub use cli::{Cli, Command};

// Crate-level exports - Password generation
pub use password::{ConfigError, PasswordConfig, copy_to_clipboard, generate};

// Crate-level exports - Tic-tac-toe engine
pub use tictactoe::{Board, Cell, GameSession, Mark, MoveError, Status};

// Crate-level exports - Terminal front end
pub use tui::run_tui;
