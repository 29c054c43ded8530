//! Core game logic
//!
//! The pure heart of the game: words, guess scoring, and the board state
//! machine. Nothing in this module performs I/O; front-ends feed it abstract
//! input actions and render its state.

mod board;
mod feedback;
mod word;

pub use board::{Action, Board, GameStatus, Row, SubmitError, Tile};
pub use feedback::{TileState, score};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses the player gets
pub const MAX_ATTEMPTS: usize = 6;
