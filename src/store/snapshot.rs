//! Game snapshots
//!
//! The persisted JSON record of a session: puzzle definition plus progress.
//! Written in full after generation and after every accepted submission;
//! read once at session start. Anything malformed is treated as absent.
//!
//! The solution set is stored verbatim and restored verbatim: a snapshot is
//! never re-filtered against a live dictionary, so a puzzle stays winnable
//! even if the dictionary shipped with a later build changes.

use super::{Store, StoreError};
use crate::core::LetterSet;
use crate::game::GameState;
use crate::puzzle::PuzzleSpec;
use serde::{Deserialize, Serialize};

/// Serialized form of a full game session
///
/// Field names stay camelCase for compatibility with earlier saves;
/// unknown fields in older saves are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    required_letter: char,
    valid_words: Vec<String>,
    found_words: Vec<String>,
    /// Display order as of the last shuffle
    puzzle_letters: Vec<char>,
    puzzle_length: usize,
    total_score: u32,
}

impl Snapshot {
    /// Capture the full state of a session
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let spec = state.spec();
        Self {
            required_letter: spec.required(),
            valid_words: spec.valid_words().to_vec(),
            found_words: state.found_words().to_vec(),
            puzzle_letters: spec.letters().as_slice().to_vec(),
            puzzle_length: spec.letter_count(),
            total_score: state.total_score(),
        }
    }

    /// Rebuild a session, or `None` if the snapshot violates any invariant
    #[must_use]
    pub fn into_state(self) -> Option<GameState> {
        if self.puzzle_length != self.puzzle_letters.len() {
            return None;
        }

        let letters = LetterSet::new(self.puzzle_letters).ok()?;
        let spec = PuzzleSpec::new(letters, self.required_letter, self.valid_words).ok()?;

        Some(GameState::from_parts(
            spec,
            self.found_words,
            self.total_score,
        ))
    }
}

/// Serialize the session and overwrite the stored slot
///
/// # Errors
/// Returns `StoreError` if the backend write fails; the in-memory state is
/// untouched and the caller should surface the failure as a warning.
pub fn persist<S: Store>(store: &mut S, state: &GameState) -> Result<(), StoreError> {
    let snapshot = Snapshot::from_state(state);
    let payload =
        serde_json::to_string(&snapshot).expect("snapshot serialization cannot fail");
    store.save(&payload)
}

/// Load the stored session, `None` if absent or malformed
///
/// Never fails hard: unreadable storage, broken JSON, and invariant
/// violations all fall back to "no saved game".
#[must_use]
pub fn restore<S: Store>(store: &S) -> Option<GameState> {
    let payload = store.load().ok()??;
    let snapshot: Snapshot = serde_json::from_str(&payload).ok()?;
    snapshot.into_state()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::submit;
    use crate::store::MemoryStore;

    fn state() -> GameState {
        let letters = LetterSet::new("catsdog".chars()).unwrap();
        let words = ["cats", "coast", "tacos", "catsdog"]
            .iter()
            .map(ToString::to_string);
        let spec = PuzzleSpec::new(letters, 'a', words).unwrap();
        GameState::new(spec)
    }

    #[test]
    fn persist_restore_round_trips() {
        let mut state = state();
        submit(&mut state, "cats");
        submit(&mut state, "tacos");

        let mut store = MemoryStore::new();
        persist(&mut store, &state).unwrap();

        let restored = restore(&store).unwrap();
        assert_eq!(restored, state);
        assert_eq!(restored.found_words(), &["cats", "tacos"]);
        assert_eq!(restored.total_score(), state.total_score());
    }

    #[test]
    fn restore_keeps_shuffled_letter_order() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut state = state();
        let mut rng = StdRng::seed_from_u64(8);
        state.shuffle_letters(&mut rng);
        let order: Vec<char> = state.spec().letters().as_slice().to_vec();

        let mut store = MemoryStore::new();
        persist(&mut store, &state).unwrap();

        let restored = restore(&store).unwrap();
        assert_eq!(restored.spec().letters().as_slice(), order.as_slice());
    }

    #[test]
    fn restore_absent_store_is_none() {
        assert!(restore(&MemoryStore::new()).is_none());
    }

    #[test]
    fn restore_malformed_json_is_none() {
        let store = MemoryStore::with_payload("{not json");
        assert!(restore(&store).is_none());
    }

    #[test]
    fn restore_invalid_spec_is_none() {
        // Required letter outside the letter set
        let store = MemoryStore::with_payload(
            r#"{"requiredLetter":"z","validWords":[],"foundWords":[],
                "puzzleLetters":["c","a","t","s"],"puzzleLength":4,"totalScore":0}"#,
        );
        assert!(restore(&store).is_none());
    }

    #[test]
    fn restore_length_mismatch_is_none() {
        let store = MemoryStore::with_payload(
            r#"{"requiredLetter":"a","validWords":[],"foundWords":[],
                "puzzleLetters":["c","a","t","s"],"puzzleLength":7,"totalScore":0}"#,
        );
        assert!(restore(&store).is_none());
    }

    #[test]
    fn restore_ignores_unknown_fields() {
        // Older saves carried a cached max score; it is recomputed now
        let store = MemoryStore::with_payload(
            r#"{"requiredLetter":"a","validWords":["cats"],"foundWords":["cats"],
                "puzzleLetters":["c","a","t","s"],"puzzleLength":4,"totalScore":5,
                "totalMaxScore":5}"#,
        );
        let state = restore(&store).unwrap();
        assert_eq!(state.total_score(), 5);
    }
}
