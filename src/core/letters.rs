//! Puzzle letter sets
//!
//! A `LetterSet` stores the unique symbols of a puzzle in display order.
//! The order changes on shuffle; set identity does not.

use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Smallest allowed letter set
pub const MIN_LETTERS: usize = 4;

/// Largest allowed letter set
pub const MAX_LETTERS: usize = 9;

/// The unique letters of a puzzle, in display order
///
/// Symbols are single Unicode code points treated as opaque. Equality is
/// order-sensitive (display order matters for persistence round-trips); use
/// [`LetterSet::same_set`] for order-independent comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    letters: Vec<char>,
}

/// Error type for invalid letter sets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterSetError {
    #[error("letter set must have {MIN_LETTERS} to {MAX_LETTERS} unique letters, got {0}")]
    InvalidCount(usize),
    #[error("letter set contains duplicate letter '{0}'")]
    DuplicateLetter(char),
}

impl LetterSet {
    /// Create a letter set from an ordered sequence of symbols
    ///
    /// # Errors
    /// Returns `LetterSetError` if the sequence contains duplicates or its
    /// length is outside 4..=9.
    ///
    /// # Examples
    /// ```
    /// use buzzwords::core::LetterSet;
    ///
    /// let letters = LetterSet::new("catsdog".chars()).unwrap();
    /// assert_eq!(letters.len(), 7);
    /// assert!(letters.contains('a'));
    ///
    /// assert!(LetterSet::new("cat".chars()).is_err());
    /// assert!(LetterSet::new("lull".chars()).is_err());
    /// ```
    pub fn new(letters: impl IntoIterator<Item = char>) -> Result<Self, LetterSetError> {
        let letters: Vec<char> = letters.into_iter().collect();

        let mut seen = FxHashSet::default();
        for &c in &letters {
            if !seen.insert(c) {
                return Err(LetterSetError::DuplicateLetter(c));
            }
        }

        if !(MIN_LETTERS..=MAX_LETTERS).contains(&letters.len()) {
            return Err(LetterSetError::InvalidCount(letters.len()));
        }

        Ok(Self { letters })
    }

    /// Build a letter set from the distinct symbols of a word
    ///
    /// Symbols keep their first-appearance order.
    ///
    /// # Errors
    /// Returns `LetterSetError::InvalidCount` if the word's distinct-symbol
    /// count is outside 4..=9.
    pub fn from_word(word: &str) -> Result<Self, LetterSetError> {
        let mut seen = FxHashSet::default();
        let letters: Vec<char> = word.chars().filter(|&c| seen.insert(c)).collect();

        if !(MIN_LETTERS..=MAX_LETTERS).contains(&letters.len()) {
            return Err(LetterSetError::InvalidCount(letters.len()));
        }

        Ok(Self { letters })
    }

    /// Build a letter set from the union of symbols across a word list
    ///
    /// # Errors
    /// Returns `LetterSetError::InvalidCount` if the union is outside 4..=9.
    pub fn union_of<S: AsRef<str>>(words: &[S]) -> Result<Self, LetterSetError> {
        let mut seen = FxHashSet::default();
        let letters: Vec<char> = words
            .iter()
            .flat_map(|w| w.as_ref().chars())
            .filter(|&c| seen.insert(c))
            .collect();

        if !(MIN_LETTERS..=MAX_LETTERS).contains(&letters.len()) {
            return Err(LetterSetError::InvalidCount(letters.len()));
        }

        Ok(Self { letters })
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True if the set is empty (never the case for a validated set)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check membership of a symbol
    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    /// True if every symbol of `word` is a member of the set
    #[must_use]
    pub fn covers(&self, word: &str) -> bool {
        word.chars().all(|c| self.contains(c))
    }

    /// The letters in display order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.letters
    }

    /// Pick one letter uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        use rand::seq::IndexedRandom;

        // Non-empty by construction
        *self.letters.choose(rng).expect("letter set is never empty")
    }

    /// Shuffle the display order in place
    ///
    /// Membership is unchanged; only the order seen by the presentation
    /// layer (and persisted in snapshots) moves.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.letters.shuffle(rng);
    }

    /// Order-independent set equality
    #[must_use]
    pub fn same_set(&self, other: &Self) -> bool {
        if self.letters.len() != other.letters.len() {
            return false;
        }
        let mine: FxHashSet<char> = self.letters.iter().copied().collect();
        other.letters.iter().all(|c| mine.contains(c))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
