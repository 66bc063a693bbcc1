//! Game logic for a tic-tac-toe web app with move history.
//!
//! The [`game`] module holds the board, the win evaluator and the move record.
//! The [`session`] module derives everything the user interface shows from it.

pub mod game;
pub mod session;

mod error;

pub use error::Error;
