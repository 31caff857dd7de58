//! Word submission protocol
//!
//! One submission is a single request/response: the candidate is validated
//! against the session in a fixed order and either mutates the state
//! (accepted) or leaves it untouched (rejected). Rejections are ordinary
//! outcome values, not errors.

use super::GameState;
use crate::core::{MIN_WORD_LEN, score};

/// Outcome of one submission
///
/// The rejection variants are ordered by check precedence: invalid symbols
/// are diagnosed before a missing required letter, before length, before
/// duplicates, before dictionary membership. User-facing messages rely on
/// that precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// Input was empty after normalization; nothing happened
    Empty,
    /// A symbol outside the puzzle letters
    RejectedInvalidSymbol,
    /// The required letter is absent
    RejectedMissingRequired,
    /// Fewer than four symbols
    RejectedTooShort,
    /// Already found this session
    RejectedDuplicate,
    /// Not in the puzzle's solution set
    RejectedNotInDictionary,
    /// Word accepted and scored
    Accepted { score: u32 },
}

impl SubmitResult {
    /// True for the accepting outcome
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Submit a candidate word against the session
///
/// Input is trimmed and lowercased first. Exactly one outcome per call; no
/// partial mutation on rejection. The caller persists the state after an
/// accepted outcome.
///
/// # Examples
/// ```
/// use buzzwords::core::LetterSet;
/// use buzzwords::game::{GameState, SubmitResult, submit};
/// use buzzwords::puzzle::PuzzleSpec;
///
/// let letters = LetterSet::new("catsdog".chars()).unwrap();
/// let spec = PuzzleSpec::new(letters, 'a', ["cats".to_string()]).unwrap();
/// let mut state = GameState::new(spec);
///
/// assert_eq!(submit(&mut state, "CATS"), SubmitResult::Accepted { score: 1 });
/// assert_eq!(submit(&mut state, "cats"), SubmitResult::RejectedDuplicate);
/// ```
pub fn submit(state: &mut GameState, raw: &str) -> SubmitResult {
    let word = raw.trim().to_lowercase();

    if word.is_empty() {
        return SubmitResult::Empty;
    }

    let spec = state.spec();

    if !spec.letters().covers(&word) {
        return SubmitResult::RejectedInvalidSymbol;
    }

    if !word.contains(spec.required()) {
        return SubmitResult::RejectedMissingRequired;
    }

    if word.chars().count() < MIN_WORD_LEN {
        return SubmitResult::RejectedTooShort;
    }

    if state.is_found(&word) {
        return SubmitResult::RejectedDuplicate;
    }

    if !spec.is_valid_word(&word) {
        return SubmitResult::RejectedNotInDictionary;
    }

    let score = score(&word, spec.letter_count());
    state.record_find(word, score);
    SubmitResult::Accepted { score }
}
