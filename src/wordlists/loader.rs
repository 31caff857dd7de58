//! Dictionary loading utilities
//!
//! Normalizes a word source into the form the puzzle engine expects:
//! lowercase, trimmed, length >= 4, deduplicated, original order kept.

use crate::core::MIN_WORD_LEN;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file, one word per line
///
/// Lines are trimmed and lowercased; blank lines, words shorter than four
/// symbols, and repeats are dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use buzzwords::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(normalize(content.lines()))
}

/// Convert an embedded string slice to a normalized dictionary
///
/// # Examples
/// ```
/// use buzzwords::wordlists::DICTIONARY;
/// use buzzwords::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    normalize(slice.iter().copied())
}

fn normalize<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    lines
        .map(|line| line.trim().to_lowercase())
        .filter(|word| word.chars().count() >= MIN_WORD_LEN)
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
