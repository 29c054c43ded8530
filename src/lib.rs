//! Wordle Game
//!
//! A terminal Wordle: guess the hidden five-letter word in six tries, with
//! per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Action, Board, GameStatus};
//! use wordle_game::wordlists::WordLists;
//!
//! let lists = WordLists::embedded();
//! let mut board = Board::with_seed(&lists, 42);
//!
//! for ch in "crane".chars() {
//!     board.apply(Action::Letter(ch)).unwrap();
//! }
//! let _ = board.apply(Action::Submit);
//! assert_ne!(board.status(), GameStatus::Lost);
//! ```

// Core domain types and game state machine
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Interactive TUI interface
pub mod interactive;
