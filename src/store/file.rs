//! File-backed storage
//!
//! Saves go to a temporary sibling file first and are renamed into place,
//! so an interrupted write never clobbers the previous snapshot.

use super::{Store, StoreError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Storage slot backed by a single file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given path
    ///
    /// The file need not exist yet; `load` reports it as absent.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store writes to
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Store for FileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, payload: &str) -> Result<(), StoreError> {
        let temp = self.temp_path();
        fs::write(&temp, payload)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("buzzwords-test-{}-{name}", std::process::id()));
        path
    }

    #[test]
    fn load_missing_file_is_absent() {
        let store = FileStore::new(temp_file("missing"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_file("roundtrip");
        let mut store = FileStore::new(&path);

        store.save("first").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("first"));

        store.save("second").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("second"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn failed_temp_write_keeps_previous_payload() {
        let path = temp_file("blocked");
        let mut store = FileStore::new(&path);

        store.save("first").unwrap();

        // A directory at the temp path makes the staging write fail
        fs::create_dir(store.temp_path()).unwrap();
        assert!(store.save("second").is_err());
        assert_eq!(store.load().unwrap().as_deref(), Some("first"));

        let _ = fs::remove_dir(store.temp_path());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let path = temp_file("swap");
        let mut store = FileStore::new(&path);

        store.save("payload").unwrap();
        assert!(!store.temp_path().exists());

        let _ = fs::remove_file(&path);
    }
}
