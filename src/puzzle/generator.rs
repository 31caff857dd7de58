//! Puzzle generation
//!
//! Three ways to build a [`PuzzleSpec`]: random generation from a
//! dictionary, a caller-supplied word list, or a caller-chosen letter set.
//! All randomness comes through an injected `Rng` so generation is
//! deterministic under a seeded source.

use crate::core::{
    LetterSet, LetterSetError, MAX_LETTERS, MIN_LETTERS, MIN_WORD_LEN, distinct_count,
};
use crate::puzzle::{PuzzleSpec, SpecError};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Error type for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("dictionary has no word with exactly {letter_count} distinct letters")]
    NoPangramCandidates { letter_count: usize },
    #[error("no letter appears in every word of the custom list")]
    NoRequiredCandidate,
    #[error(transparent)]
    InvalidLetterSet(#[from] LetterSetError),
    #[error(transparent)]
    InvalidWordList(#[from] SpecError),
}

/// Generate a random puzzle from a dictionary
///
/// Picks a uniform random dictionary word with exactly `letter_count`
/// distinct symbols as the seed pangram, a uniform random required letter
/// from its letters, and freezes the solution set: every dictionary word of
/// length >= 4 that contains the required letter and uses only puzzle
/// letters.
///
/// # Errors
/// Returns `GenerateError::NoPangramCandidates` if no dictionary word has
/// exactly `letter_count` distinct symbols, or an `InvalidLetterSet` error
/// when `letter_count` is outside 4..=9.
pub fn generate<R: Rng + ?Sized>(
    dictionary: &[String],
    letter_count: usize,
    rng: &mut R,
) -> Result<PuzzleSpec, GenerateError> {
    if !(MIN_LETTERS..=MAX_LETTERS).contains(&letter_count) {
        return Err(LetterSetError::InvalidCount(letter_count).into());
    }

    let candidates: Vec<&String> = dictionary
        .iter()
        .filter(|w| distinct_count(w) == letter_count)
        .collect();

    let seed = candidates
        .choose(rng)
        .ok_or(GenerateError::NoPangramCandidates { letter_count })?;

    let letters = LetterSet::from_word(seed)?;
    let required = letters.pick(rng);
    let valid_words = solution_set(dictionary, &letters, required);

    Ok(PuzzleSpec::new(letters, required, valid_words)?)
}

/// Build a puzzle from a caller-supplied word list
///
/// The letter set is the union of symbols across the list and the solution
/// set is the list itself (lowercased, deduplicated) with no dictionary
/// re-filtering. The required letter must appear in every word: a supplied
/// `required` is checked against the list, and a random pick draws only
/// from the letters common to all words.
///
/// # Errors
/// Returns an error if the symbol union falls outside 4..=9 letters, a word
/// is shorter than 4 symbols, the supplied required letter is missing from
/// some word, or (for a random pick) no letter is shared by every word.
pub fn from_word_list<R: Rng + ?Sized>(
    words: &[String],
    required: Option<char>,
    rng: &mut R,
) -> Result<PuzzleSpec, GenerateError> {
    let normalized: Vec<String> = words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();

    let letters = LetterSet::union_of(&normalized)?;

    // Letters present in every word, in display order
    let common: Vec<char> = letters
        .as_slice()
        .iter()
        .copied()
        .filter(|&c| normalized.iter().all(|w| w.contains(c)))
        .collect();

    let required = match required {
        Some(c) => {
            if normalized.iter().all(|w| w.contains(c)) && letters.contains(c) {
                c
            } else if letters.contains(c) {
                // In the set but absent from some word: surface the first
                // offender so the caller can fix the list
                let offender = normalized
                    .iter()
                    .find(|w| !w.contains(c))
                    .cloned()
                    .unwrap_or_default();
                return Err(SpecError::WordMissingRequired(offender).into());
            } else {
                return Err(SpecError::RequiredLetterMissing(c).into());
            }
        }
        None => *common.choose(rng).ok_or(GenerateError::NoRequiredCandidate)?,
    };

    Ok(PuzzleSpec::new(letters, required, normalized)?)
}

/// Build a puzzle from an explicit letter set
///
/// The solution set is computed from the dictionary exactly as in
/// [`generate`]; the letters and required letter are the caller's.
///
/// # Errors
/// Returns an error if the letter set has duplicates or falls outside 4..=9
/// symbols, or the required letter is not a member.
pub fn seeded(
    dictionary: &[String],
    letters: &[char],
    required: char,
) -> Result<PuzzleSpec, GenerateError> {
    let letters = LetterSet::new(letters.iter().copied())?;
    if !letters.contains(required) {
        return Err(SpecError::RequiredLetterMissing(required).into());
    }

    let valid_words = solution_set(dictionary, &letters, required);
    Ok(PuzzleSpec::new(letters, required, valid_words)?)
}

/// The dictionary subset satisfying the puzzle's composition rules
fn solution_set(dictionary: &[String], letters: &LetterSet, required: char) -> Vec<String> {
    let mut seen = FxHashSet::default();
    dictionary
        .iter()
        .filter(|w| w.chars().count() >= MIN_WORD_LEN)
        .filter(|w| w.contains(required))
        .filter(|w| letters.covers(w))
        .filter(|w| seen.insert(w.as_str()))
        .cloned()
        .collect()
}
