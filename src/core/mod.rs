//! Core domain types
//!
//! Letter sets and the scoring rules shared by every puzzle.

pub mod letters;
pub mod scoring;

pub use letters::{LetterSet, LetterSetError, MAX_LETTERS, MIN_LETTERS};
pub use scoring::{MIN_WORD_LEN, distinct_count, is_pangram, score};
