//! In-memory storage
//!
//! A volatile slot satisfying the [`Store`] contract, used by tests and any
//! host that wants purely ephemeral sessions.

use super::{Store, StoreError};

/// Storage slot held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a payload
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Some(payload.into()),
        }
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, payload: &str) -> Result<(), StoreError> {
        self.slot = Some(payload.to_string());
        Ok(())
    }
}
