//! Hot-seat tic-tac-toe engine.
//!
//! [`GameSession`] drives the state machine; the pure win and draw
//! checks live in their own module so they can be tested in isolation.

mod rules;
mod session;
mod types;

pub use session::{GameSession, MoveError, Status};
pub use types::{Board, Cell, Mark};
