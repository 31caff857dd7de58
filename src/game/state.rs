//! Mutable session state
//!
//! One `GameState` per session: the puzzle, the words found so far in
//! discovery order, and the running score. The only mutation path during
//! play is an accepted submission.

use crate::puzzle::PuzzleSpec;
use rand::Rng;

/// The mutable record of one play session
///
/// Invariant: `total_score` always equals the sum of the scores of
/// `found_words`, and `found_words` holds distinct members of the puzzle's
/// solution set in the order they were found. Both are maintained by the
/// submission protocol, not re-checked on every access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    spec: PuzzleSpec,
    found_words: Vec<String>,
    total_score: u32,
}

impl GameState {
    /// Start a fresh session on the given puzzle
    #[must_use]
    pub const fn new(spec: PuzzleSpec) -> Self {
        Self {
            spec,
            found_words: Vec::new(),
            total_score: 0,
        }
    }

    /// Rebuild a session from snapshot parts
    ///
    /// Snapshots are trusted as-written; duplicate or invalid found words
    /// are rejected at submission time, not on load.
    pub(crate) const fn from_parts(
        spec: PuzzleSpec,
        found_words: Vec<String>,
        total_score: u32,
    ) -> Self {
        Self {
            spec,
            found_words,
            total_score,
        }
    }

    /// The puzzle being played
    #[inline]
    #[must_use]
    pub const fn spec(&self) -> &PuzzleSpec {
        &self.spec
    }

    /// Words found so far, in discovery order
    #[inline]
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    /// Number of words found so far
    #[inline]
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found_words.len()
    }

    /// The running score
    #[inline]
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    /// True if the word has already been found
    #[must_use]
    pub fn is_found(&self, word: &str) -> bool {
        self.found_words.iter().any(|w| w == word)
    }

    /// True if every valid word has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found_words.len() == self.spec.valid_words().len()
    }

    /// Shuffle the display order of the puzzle letters
    pub fn shuffle_letters<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.spec.shuffle_letters(rng);
    }

    /// Record an accepted word and its score
    ///
    /// Caller (the submission protocol) has already validated the word.
    pub(crate) fn record_find(&mut self, word: String, score: u32) {
        self.found_words.push(word);
        self.total_score += score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;

    fn spec() -> PuzzleSpec {
        let letters = LetterSet::new("catsdog".chars()).unwrap();
        let words = ["cats", "coast", "tacos"].iter().map(ToString::to_string);
        PuzzleSpec::new(letters, 'a', words).unwrap()
    }

    #[test]
    fn new_state_is_empty() {
        let state = GameState::new(spec());
        assert_eq!(state.found_count(), 0);
        assert_eq!(state.total_score(), 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn record_find_keeps_discovery_order() {
        let mut state = GameState::new(spec());
        state.record_find("tacos".to_string(), 5);
        state.record_find("cats".to_string(), 1);

        assert_eq!(state.found_words(), &["tacos", "cats"]);
        assert_eq!(state.total_score(), 6);
        assert!(state.is_found("cats"));
        assert!(!state.is_found("coast"));
    }

    #[test]
    fn complete_when_all_words_found() {
        let mut state = GameState::new(spec());
        for word in ["cats", "coast", "tacos"] {
            state.record_find(word.to_string(), 1);
        }
        assert!(state.is_complete());
    }
}
