//! Word lists
//!
//! Provides the embedded default dictionary compiled into the binary and a
//! loader for external dictionary files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
