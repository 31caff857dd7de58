//! Snapshot persistence and shareable tokens
//!
//! Storage sits behind the small [`Store`] capability so the game core can
//! be exercised against an in-memory backend while the CLI uses a file.

pub mod file;
pub mod memory;
pub mod share;
pub mod snapshot;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use share::DecodeError;
pub use snapshot::{Snapshot, persist, restore};

use thiserror::Error;

/// Error type for storage backends
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A single mutable slot of durable storage
///
/// One slot per session: `save` fully overwrites, `load` returns the last
/// successfully saved payload. Implementations must not corrupt the
/// previous payload when a save fails partway.
pub trait Store {
    /// Read the stored payload, `None` if nothing was ever saved
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored payload
    ///
    /// # Errors
    /// Returns `StoreError` if the write cannot be completed; the previous
    /// payload stays intact in that case.
    fn save(&mut self, payload: &str) -> Result<(), StoreError>;
}
