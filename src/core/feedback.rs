//! Guess scoring
//!
//! Scoring a guess against the target produces one [`TileState`] per letter:
//! - `Correct`: right letter, right position (green)
//! - `WrongSpot`: letter present elsewhere in the target (yellow)
//! - `Incorrect`: letter not in the target, or already used up (gray)
//!
//! Duplicate letters are handled with a two-pass pool of remaining target
//! letters, so the number of `Correct` + `WrongSpot` marks for a letter
//! never exceeds its count in the target.

use super::{WORD_LENGTH, Word};

/// Visual state of a single grid tile
///
/// `Empty` and `Occupied` are pre-submission states written during input;
/// the other three are produced by scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    /// No letter entered
    #[default]
    Empty,
    /// Letter entered, row not yet submitted
    Occupied,
    /// Letter is in the correct position
    Correct,
    /// Letter is in the target, but at another position
    WrongSpot,
    /// Letter is not in the target
    Incorrect,
}

impl TileState {
    /// Whether this state was produced by scoring a submitted row
    #[inline]
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Correct | Self::WrongSpot | Self::Incorrect)
    }
}

/// Score `guess` against `target`, one state per position
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct` and remove each
///    matched letter from the pool of available target letters.
/// 2. Second pass, left to right: a not-yet-marked letter still in the pool
///    becomes `WrongSpot` and consumes one occurrence; otherwise `Incorrect`.
///
/// The left-to-right consumption means that when a letter appears more often
/// in the guess than in the target, the earliest unmatched occurrence wins
/// the `WrongSpot` mark and later ones go gray.
///
/// # Examples
/// ```
/// use wordle_game::core::{TileState, Word, score};
///
/// let guess = Word::new("dance").unwrap();
/// let target = Word::new("crane").unwrap();
/// assert_eq!(
///     score(&guess, &target),
///     [
///         TileState::Incorrect,
///         TileState::WrongSpot,
///         TileState::WrongSpot,
///         TileState::WrongSpot,
///         TileState::Correct,
///     ]
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> [TileState; WORD_LENGTH] {
    let mut result = [TileState::Incorrect; WORD_LENGTH];
    let mut available = target.char_counts();

    // First pass: exact matches
    // Allow: index needed to access guess[i], target[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.chars()[i] == target.chars()[i] {
            result[i] = TileState::Correct;

            // Remove from available pool
            let letter = guess.chars()[i];
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: wrong-position letters from the remaining pool
    // Allow: index needed to access guess[i] and check/set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] != TileState::Correct {
            let letter = guess.chars()[i];
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                result[i] = TileState::WrongSpot;
                *count -= 1;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use TileState::{Correct, Incorrect, WrongSpot};

    fn count_in(word: &Word, letter: u8) -> usize {
        word.chars().iter().filter(|&&c| c == letter).count()
    }

    #[test]
    fn score_all_gray() {
        let guess = Word::new("abcde").unwrap();
        let target = Word::new("fghij").unwrap();

        assert_eq!(score(&guess, &target), [Incorrect; WORD_LENGTH]);
    }

    #[test]
    fn score_all_green_against_itself() {
        for word in ["crane", "slate", "audio", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert_eq!(score(&w, &w), [Correct; WORD_LENGTH]);
        }
    }

    #[test]
    fn score_correct_iff_positions_match() {
        // Property from the rules: Correct at index i exactly when the
        // letters at i agree.
        let pairs = [
            ("crane", "slate"),
            ("dance", "crane"),
            ("speed", "erase"),
            ("allot", "apple"),
            ("aaaaa", "ababa"),
        ];

        for (g, t) in pairs {
            let guess = Word::new(g).unwrap();
            let target = Word::new(t).unwrap();
            let states = score(&guess, &target);

            for i in 0..WORD_LENGTH {
                assert_eq!(
                    states[i] == Correct,
                    guess.chars()[i] == target.chars()[i],
                    "position {i} of {g} vs {t}"
                );
            }
        }
    }

    #[test]
    fn score_marks_never_exceed_target_letter_count() {
        let pairs = [
            ("speed", "erase"),
            ("eerie", "speed"),
            ("allot", "apple"),
            ("mamma", "among"),
            ("aaaaa", "abbba"),
        ];

        for (g, t) in pairs {
            let guess = Word::new(g).unwrap();
            let target = Word::new(t).unwrap();
            let states = score(&guess, &target);

            for letter in b'a'..=b'z' {
                let marks = (0..WORD_LENGTH)
                    .filter(|&i| {
                        guess.chars()[i] == letter && matches!(states[i], Correct | WrongSpot)
                    })
                    .count();
                assert!(
                    marks <= count_in(&target, letter),
                    "letter {} over-marked in {g} vs {t}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn score_dance_against_crane() {
        let guess = Word::new("dance").unwrap();
        let target = Word::new("crane").unwrap();

        // d absent; a, n, c all present elsewhere; e exact
        assert_eq!(
            score(&guess, &target),
            [Incorrect, WrongSpot, WrongSpot, WrongSpot, Correct]
        );
    }

    #[test]
    fn score_apple_against_allot() {
        let guess = Word::new("apple").unwrap();
        let target = Word::new("allot").unwrap();

        // a exact; no p in allot; first l consumes one of allot's two l's
        // via the wrong-spot pool; e absent
        assert_eq!(
            score(&guess, &target),
            [Correct, Incorrect, Incorrect, WrongSpot, Incorrect]
        );
    }

    #[test]
    fn score_duplicate_guess_letter_single_target_letter() {
        // Guess has two e's, target has one: the earlier unmatched e takes
        // the WrongSpot, the later one goes gray.
        let guess = Word::new("geese").unwrap();
        let target = Word::new("angel").unwrap();
        assert_eq!(
            score(&guess, &target),
            [WrongSpot, WrongSpot, Incorrect, Incorrect, Incorrect]
        );
    }

    #[test]
    fn score_green_consumes_before_yellow() {
        // ROBOT vs FLOOR: first o is WrongSpot, second o is Correct, and
        // the exact match consumes its pool entry first.
        let guess = Word::new("robot").unwrap();
        let target = Word::new("floor").unwrap();

        assert_eq!(
            score(&guess, &target),
            [WrongSpot, WrongSpot, Incorrect, Correct, Incorrect]
        );
    }

    #[test]
    fn score_speed_against_erase() {
        let guess = Word::new("speed").unwrap();
        let target = Word::new("erase").unwrap();

        // s elsewhere, p absent, both e's elsewhere (erase has two), d absent
        assert_eq!(
            score(&guess, &target),
            [WrongSpot, Incorrect, WrongSpot, WrongSpot, Incorrect]
        );
    }

    #[test]
    fn tile_state_is_scored() {
        assert!(Correct.is_scored());
        assert!(WrongSpot.is_scored());
        assert!(Incorrect.is_scored());
        assert!(!TileState::Empty.is_scored());
        assert!(!TileState::Occupied.is_scored());
    }
}
