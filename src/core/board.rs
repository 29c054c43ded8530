//! Game board state machine
//!
//! [`Board`] owns the 6x5 tile grid, the cursor, the hidden target word and
//! the game status, and processes one abstract input [`Action`] at a time.
//! Every action is applied synchronously and atomically; once the status
//! leaves `InProgress`, further input is ignored until [`Board::new_game`]
//! or [`Board::retry`].

use super::{MAX_ATTEMPTS, TileState, WORD_LENGTH, Word, score};
use crate::wordlists::WordLists;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// A single grid cell: an optional letter plus its visual state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    letter: Option<char>,
    state: TileState,
}

impl Tile {
    /// The letter in this tile, if any
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        self.letter
    }

    /// The tile's current visual state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> TileState {
        self.state
    }

    fn clear(&mut self) {
        self.letter = None;
        self.state = TileState::Empty;
    }
}

/// One guess row of the grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    tiles: [Tile; WORD_LENGTH],
}

impl Row {
    /// The row's tiles in order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.tiles
    }

    /// The row's letters concatenated, empty tiles as spaces
    #[must_use]
    pub fn word(&self) -> String {
        self.tiles.iter().map(|t| t.letter.unwrap_or(' ')).collect()
    }

    fn clear(&mut self) {
        for tile in &mut self.tiles {
            tile.clear();
        }
    }
}

/// Overall game status; transitions only move forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Abstract input action, decoupled from any concrete input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A letter key was pressed
    Letter(char),
    /// Delete the letter before the cursor
    Backspace,
    /// Submit the current row for scoring
    Submit,
}

/// Recoverable error from submitting a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The submitted word is not in the allowed-guess list
    NotInWordList,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInWordList => write!(f, "not in word list"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// The game state machine
///
/// Holds the grid, cursor, target word and status. All mutation goes through
/// the input methods below; tiles never mutate themselves.
pub struct Board<'a> {
    lists: &'a WordLists,
    rng: StdRng,
    target: Word,
    rows: [Row; MAX_ATTEMPTS],
    row_index: usize,
    tile_index: usize,
    status: GameStatus,
    invalid_word: bool,
}

impl<'a> Board<'a> {
    /// Create a board with an OS-seeded RNG and a freshly picked target
    #[must_use]
    pub fn new(lists: &'a WordLists) -> Self {
        Self::with_rng(lists, StdRng::from_os_rng())
    }

    /// Create a board with a fixed seed, for reproducible games
    #[must_use]
    pub fn with_seed(lists: &'a WordLists, seed: u64) -> Self {
        Self::with_rng(lists, StdRng::seed_from_u64(seed))
    }

    /// Create a board using the given RNG for target selection
    #[must_use]
    pub fn with_rng(lists: &'a WordLists, mut rng: StdRng) -> Self {
        let target = lists.pick_solution(&mut rng).clone();

        Self {
            lists,
            rng,
            target,
            rows: Default::default(),
            row_index: 0,
            tile_index: 0,
            status: GameStatus::InProgress,
            invalid_word: false,
        }
    }

    /// Clear the grid and pick a new target word
    pub fn new_game(&mut self) {
        self.clear_grid();
        self.target = self.lists.pick_solution(&mut self.rng).clone();
    }

    /// Clear the grid but keep the same target word
    ///
    /// This is the "try again" affordance: another run at the word you just
    /// missed.
    pub fn retry(&mut self) {
        self.clear_grid();
    }

    fn clear_grid(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
        self.row_index = 0;
        self.tile_index = 0;
        self.status = GameStatus::InProgress;
        self.invalid_word = false;
    }

    /// Apply one abstract input action
    ///
    /// # Errors
    /// Returns [`SubmitError::NotInWordList`] when a `Submit` action carries
    /// a word outside the allowed list; the row stays editable.
    pub fn apply(&mut self, action: Action) -> Result<(), SubmitError> {
        match action {
            Action::Letter(ch) => {
                self.input_letter(ch);
                Ok(())
            }
            Action::Backspace => {
                self.input_backspace();
                Ok(())
            }
            Action::Submit => self.submit_row(),
        }
    }

    /// Type a letter into the current row
    ///
    /// Ignored unless the game is in progress, the row has space, and `ch`
    /// is an ASCII letter. Letters are stored lowercase.
    pub fn input_letter(&mut self, ch: char) {
        if self.status != GameStatus::InProgress
            || self.tile_index >= WORD_LENGTH
            || !ch.is_ascii_alphabetic()
        {
            return;
        }

        let tile = &mut self.rows[self.row_index].tiles[self.tile_index];
        tile.letter = Some(ch.to_ascii_lowercase());
        tile.state = TileState::Occupied;
        self.tile_index += 1;
    }

    /// Delete the letter before the cursor
    ///
    /// The cursor floors at the start of the row; deleting there is a no-op
    /// on the grid. Also dismisses the invalid-word notice.
    pub fn input_backspace(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }

        self.invalid_word = false;
        self.tile_index = self.tile_index.saturating_sub(1);
        self.rows[self.row_index].tiles[self.tile_index].clear();
    }

    /// Submit the current row for validation and scoring
    ///
    /// Ignored unless the row is full and the game is in progress. An
    /// unknown word sets the invalid-word notice and returns an error
    /// without touching the grid or cursor; the attempt is not consumed.
    ///
    /// # Errors
    /// Returns [`SubmitError::NotInWordList`] for a word outside the
    /// allowed list.
    ///
    /// # Panics
    /// Will not panic - a full row always forms a valid `Word`.
    pub fn submit_row(&mut self) -> Result<(), SubmitError> {
        if self.status != GameStatus::InProgress || self.tile_index < WORD_LENGTH {
            return Ok(());
        }

        // A full row holds WORD_LENGTH lowercase ASCII letters
        let guess = Word::new(self.rows[self.row_index].word()).expect("full row is a valid word");

        if !self.lists.is_allowed(&guess) {
            self.invalid_word = true;
            return Err(SubmitError::NotInWordList);
        }

        self.invalid_word = false;
        let states = score(&guess, &self.target);
        let won = states.iter().all(|&s| s == TileState::Correct);
        for (tile, state) in self.rows[self.row_index].tiles.iter_mut().zip(states) {
            tile.state = state;
        }

        if won {
            self.status = GameStatus::Won;
        } else {
            self.row_index += 1;
            self.tile_index = 0;
            if self.row_index == MAX_ATTEMPTS {
                self.status = GameStatus::Lost;
            }
        }

        Ok(())
    }

    /// All rows of the grid, for rendering
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ATTEMPTS] {
        &self.rows
    }

    /// Index of the row currently accepting input
    #[inline]
    #[must_use]
    pub const fn row_index(&self) -> usize {
        self.row_index
    }

    /// Index of the next tile to fill within the current row
    #[inline]
    #[must_use]
    pub const fn tile_index(&self) -> usize {
        self.tile_index
    }

    /// Current game status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The hidden target word
    ///
    /// Front-ends reveal it when the game is lost.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Whether the invalid-word notice should be shown
    #[inline]
    #[must_use]
    pub const fn invalid_word(&self) -> bool {
        self.invalid_word
    }

    /// Whether the game has ended, enabling new-game/try-again affordances
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress)
    }
}
