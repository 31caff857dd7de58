//! Puzzle specification
//!
//! The letter set, required letter, and solution set for one session. The
//! solution set is frozen when the spec is built and never re-filtered
//! against a live dictionary, so restored and shared puzzles stay stable.

use crate::core::{LetterSet, MIN_WORD_LEN, is_pangram, score};
use rand::Rng;
use thiserror::Error;

/// The immutable definition of a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSpec {
    letters: LetterSet,
    required: char,
    valid_words: Vec<String>,
}

/// Error type for specs that violate the puzzle invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error("required letter '{0}' is not in the letter set")]
    RequiredLetterMissing(char),
    #[error("word \"{0}\" is shorter than {MIN_WORD_LEN} letters")]
    WordTooShort(String),
    #[error("word \"{0}\" uses letters outside the puzzle")]
    WordNotCovered(String),
    #[error("word \"{0}\" does not contain the required letter")]
    WordMissingRequired(String),
}

impl PuzzleSpec {
    /// Build a spec, validating every invariant
    ///
    /// Words are sorted and deduplicated. Each must be at least
    /// [`MIN_WORD_LEN`] symbols, composed only of puzzle letters, and
    /// contain the required letter.
    ///
    /// # Errors
    /// Returns `SpecError` if the required letter is outside the set or any
    /// word breaks the composition rules.
    pub fn new(
        letters: LetterSet,
        required: char,
        words: impl IntoIterator<Item = String>,
    ) -> Result<Self, SpecError> {
        if !letters.contains(required) {
            return Err(SpecError::RequiredLetterMissing(required));
        }

        let mut valid_words: Vec<String> = words.into_iter().collect();
        valid_words.sort();
        valid_words.dedup();

        for word in &valid_words {
            if word.chars().count() < MIN_WORD_LEN {
                return Err(SpecError::WordTooShort(word.clone()));
            }
            if !letters.covers(word) {
                return Err(SpecError::WordNotCovered(word.clone()));
            }
            if !word.contains(required) {
                return Err(SpecError::WordMissingRequired(word.clone()));
            }
        }

        Ok(Self {
            letters,
            required,
            valid_words,
        })
    }

    /// The puzzle letters in display order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &LetterSet {
        &self.letters
    }

    /// The letter every accepted word must contain
    #[inline]
    #[must_use]
    pub const fn required(&self) -> char {
        self.required
    }

    /// Number of puzzle letters
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    /// The full solution set, sorted ascending
    #[inline]
    #[must_use]
    pub fn valid_words(&self) -> &[String] {
        &self.valid_words
    }

    /// Check solution-set membership
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.valid_words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    /// The pangrams of the solution set
    #[must_use]
    pub fn pangrams(&self) -> Vec<&str> {
        let count = self.letter_count();
        self.valid_words
            .iter()
            .filter(|w| is_pangram(w, count))
            .map(String::as_str)
            .collect()
    }

    /// Highest score attainable by finding every valid word
    ///
    /// Recomputed on demand; the solution set never changes within a
    /// session, so there is nothing to invalidate.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        let count = self.letter_count();
        self.valid_words.iter().map(|w| score(w, count)).sum()
    }

    /// Shuffle the display order of the letters
    ///
    /// Puzzle identity (set membership, required letter, solution set) is
    /// untouched; only the order snapshots persist and the presentation
    /// layer shows.
    pub fn shuffle_letters<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.letters.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> PuzzleSpec {
        let letters = LetterSet::new("catsdog".chars()).unwrap();
        let words = ["cats", "coast", "tacos", "catsdog"]
            .iter()
            .map(ToString::to_string);
        PuzzleSpec::new(letters, 'a', words).unwrap()
    }

    #[test]
    fn new_sorts_and_dedupes() {
        let letters = LetterSet::new("catsdog".chars()).unwrap();
        let words = ["tacos", "cats", "tacos"].iter().map(ToString::to_string);
        let spec = PuzzleSpec::new(letters, 'a', words).unwrap();

        assert_eq!(spec.valid_words(), &["cats", "tacos"]);
    }

    #[test]
    fn new_rejects_required_outside_set() {
        let letters = LetterSet::new("catsdog".chars()).unwrap();
        let result = PuzzleSpec::new(letters, 'z', std::iter::empty());
        assert_eq!(result, Err(SpecError::RequiredLetterMissing('z')));
    }

    #[test]
    fn new_rejects_uncovered_word() {
        let letters = LetterSet::new("catsdog".chars()).unwrap();
        let result = PuzzleSpec::new(letters, 'a', ["cable".to_string()]);
        assert_eq!(result, Err(SpecError::WordNotCovered("cable".to_string())));
    }

    #[test]
    fn new_rejects_word_missing_required() {
        let letters = LetterSet::new("catsdog".chars()).unwrap();
        let result = PuzzleSpec::new(letters, 'a', ["dogs".to_string()]);
        assert_eq!(
            result,
            Err(SpecError::WordMissingRequired("dogs".to_string()))
        );
    }

    #[test]
    fn new_rejects_short_word() {
        let letters = LetterSet::new("catsdog".chars()).unwrap();
        let result = PuzzleSpec::new(letters, 'a', ["cat".to_string()]);
        assert_eq!(result, Err(SpecError::WordTooShort("cat".to_string())));
    }

    #[test]
    fn membership_uses_frozen_set() {
        let spec = spec();
        assert!(spec.is_valid_word("tacos"));
        assert!(spec.is_valid_word("cats"));
        assert!(!spec.is_valid_word("coat"));
        assert!(!spec.is_valid_word(""));
    }

    #[test]
    fn pangrams_judged_by_distinct_count() {
        let spec = spec();
        assert_eq!(spec.pangrams(), vec!["catsdog"]);
    }

    #[test]
    fn max_score_sums_solution_set() {
        let spec = spec();
        // cats=1, coast=5, tacos=5, catsdog=7+7
        assert_eq!(spec.max_score(), 1 + 5 + 5 + 14);
    }

    #[test]
    fn shuffle_keeps_identity() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut spec = spec();
        let before = spec.clone();
        let mut rng = StdRng::seed_from_u64(99);
        spec.shuffle_letters(&mut rng);

        assert!(spec.letters().same_set(before.letters()));
        assert_eq!(spec.required(), before.required());
        assert_eq!(spec.valid_words(), before.valid_words());
        assert_eq!(spec.max_score(), before.max_score());
    }
}
