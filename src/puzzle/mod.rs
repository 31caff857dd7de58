//! Puzzle definitions and generation
//!
//! A [`PuzzleSpec`] is the immutable definition of one puzzle: the letter
//! set, the required letter, and the solution set frozen at generation time.

pub mod generator;
pub mod spec;

pub use generator::GenerateError;
pub use spec::{PuzzleSpec, SpecError};
