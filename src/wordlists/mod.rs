//! Word lists for the game
//!
//! Two collections drive the game: a large set of allowed guesses and a
//! smaller sequence of solution words the target is drawn from. Default
//! lists are embedded at build time; custom lists can be loaded from files.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error constructing [`WordLists`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListError {
    /// The allowed-guess list contained no valid words
    EmptyAllowed,
    /// The solutions list contained no valid words
    EmptySolutions,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAllowed => write!(f, "allowed-guess list is empty"),
            Self::EmptySolutions => write!(f, "solutions list is empty"),
        }
    }
}

impl std::error::Error for WordListError {}

/// The two word collections the game runs on
///
/// Solutions are merged into the allowed set, so every solution is always a
/// legal guess even when the lists come from separate files.
pub struct WordLists {
    allowed: FxHashSet<Word>,
    solutions: Vec<Word>,
}

impl WordLists {
    /// Build word lists from pre-validated words
    ///
    /// # Errors
    /// Returns [`WordListError`] if either collection is empty; a game
    /// cannot start without a guess dictionary and at least one solution.
    pub fn new(allowed: Vec<Word>, solutions: Vec<Word>) -> Result<Self, WordListError> {
        if allowed.is_empty() {
            return Err(WordListError::EmptyAllowed);
        }
        if solutions.is_empty() {
            return Err(WordListError::EmptySolutions);
        }

        let mut allowed: FxHashSet<Word> = allowed.into_iter().collect();
        allowed.extend(solutions.iter().cloned());

        Ok(Self { allowed, solutions })
    }

    /// Build word lists from the embedded defaults
    ///
    /// # Panics
    /// Will not panic - the embedded lists are generated non-empty at
    /// build time.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(ALLOWED),
            loader::words_from_slice(SOLUTIONS),
        )
        .expect("embedded word lists are non-empty")
    }

    /// Whether `word` is accepted as a guess
    #[inline]
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }

    /// The solution words, in list order
    #[inline]
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Number of words accepted as guesses
    #[inline]
    #[must_use]
    pub fn allowed_len(&self) -> usize {
        self.allowed.len()
    }

    /// Pick a uniformly random solution word
    ///
    /// # Panics
    /// Will not panic - construction guarantees a non-empty solutions list.
    #[must_use]
    pub fn pick_solution<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.solutions
            .choose(rng)
            .expect("solutions list verified non-empty")
    }
}
