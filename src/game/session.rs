//! Session orchestration
//!
//! A `Session` ties the game state to a storage slot and a random source:
//! it resolves the start-up precedence (share token, then saved snapshot,
//! then fresh generation), persists after every state-changing operation,
//! and turns persistence failures into warnings instead of faults.

use super::{GameState, SubmitResult, submit};
use crate::puzzle::{GenerateError, PuzzleSpec, generator};
use crate::store::{DecodeError, Store, StoreError, persist, restore, share};
use rand::rngs::StdRng;

/// Where the session's puzzle came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartSource {
    /// Decoded from a share token
    Shared,
    /// Restored from a saved snapshot
    Restored,
    /// Freshly generated
    Generated,
}

/// How a session started, plus anything the caller should mention
///
/// Neither field is fatal: a token that fails to decode falls through to
/// the next source, and a failed initial save leaves the game playable.
#[derive(Debug)]
pub struct StartReport {
    pub source: StartSource,
    pub persist_warning: Option<StoreError>,
    pub token_error: Option<DecodeError>,
}

/// Result of submitting a word through a session
///
/// An accepted word is persisted immediately; if the save fails the
/// in-memory acceptance stands and the failure is carried as a warning.
#[derive(Debug)]
pub struct Submitted {
    pub result: SubmitResult,
    pub persist_warning: Option<StoreError>,
}

/// A running game bound to storage and a random source
pub struct Session<S: Store> {
    state: GameState,
    store: S,
    rng: StdRng,
    dictionary: Vec<String>,
}

impl<S: Store> Session<S> {
    /// Start a session with the full precedence chain
    ///
    /// A decodable share token wins over a saved snapshot, which wins over
    /// generating a new `letter_count` puzzle. A token that fails to decode
    /// falls through to the next source, with the decode failure carried in
    /// the report. The resulting state is persisted unless it was itself
    /// restored; a failed save is carried in the report too.
    ///
    /// # Errors
    /// Returns `GenerateError` only when generation is reached and fails
    /// (bad letter count, or no pangram candidates in the dictionary).
    pub fn start(
        dictionary: Vec<String>,
        store: S,
        token: Option<&str>,
        letter_count: usize,
        rng: StdRng,
    ) -> Result<(Self, StartReport), GenerateError> {
        let mut token_error = None;
        if let Some(t) = token {
            match share::decode(t) {
                Ok(spec) => {
                    let (session, persist_warning) = Self::from_spec(dictionary, store, spec, rng);
                    return Ok((
                        session,
                        StartReport {
                            source: StartSource::Shared,
                            persist_warning,
                            token_error: None,
                        },
                    ));
                }
                Err(e) => token_error = Some(e),
            }
        }

        if let Some(state) = restore(&store) {
            let session = Self {
                state,
                store,
                rng,
                dictionary,
            };
            return Ok((
                session,
                StartReport {
                    source: StartSource::Restored,
                    persist_warning: None,
                    token_error,
                },
            ));
        }

        let mut rng = rng;
        let spec = generator::generate(&dictionary, letter_count, &mut rng)?;
        let mut session = Self {
            state: GameState::new(spec),
            store,
            rng,
            dictionary,
        };
        session.state.shuffle_letters(&mut session.rng);
        let persist_warning = persist(&mut session.store, &session.state).err();
        Ok((
            session,
            StartReport {
                source: StartSource::Generated,
                persist_warning,
                token_error,
            },
        ))
    }

    /// Start a session on an already-built puzzle (shared, custom, seeded)
    ///
    /// Progress starts fresh and the snapshot is replaced. A failed save is
    /// returned as a warning; the session is playable either way.
    pub fn from_spec(
        dictionary: Vec<String>,
        store: S,
        spec: PuzzleSpec,
        rng: StdRng,
    ) -> (Self, Option<StoreError>) {
        let mut session = Self {
            state: GameState::new(spec),
            store,
            rng,
            dictionary,
        };
        session.state.shuffle_letters(&mut session.rng);
        let warning = persist(&mut session.store, &session.state).err();
        (session, warning)
    }

    /// Replace the current game with a fresh random puzzle
    ///
    /// A failed save of the new game comes back as the warning; the
    /// in-memory replacement stands.
    ///
    /// # Errors
    /// Returns `GenerateError` if the dictionary cannot seed a
    /// `letter_count` puzzle.
    pub fn new_game(&mut self, letter_count: usize) -> Result<Option<StoreError>, GenerateError> {
        let spec = generator::generate(&self.dictionary, letter_count, &mut self.rng)?;
        self.state = GameState::new(spec);
        self.state.shuffle_letters(&mut self.rng);
        Ok(persist(&mut self.store, &self.state).err())
    }

    /// Replace the current game with a custom-list puzzle
    ///
    /// # Errors
    /// Returns `GenerateError` if the word list cannot form a puzzle.
    pub fn custom_puzzle(
        &mut self,
        words: &[String],
        required: Option<char>,
    ) -> Result<Option<StoreError>, GenerateError> {
        let spec = generator::from_word_list(words, required, &mut self.rng)?;
        self.state = GameState::new(spec);
        Ok(persist(&mut self.store, &self.state).err())
    }

    /// Replace the current game with a seeded-letters puzzle
    ///
    /// # Errors
    /// Returns `GenerateError` if the letter set or required letter is
    /// invalid.
    pub fn seeded_puzzle(
        &mut self,
        letters: &[char],
        required: char,
    ) -> Result<Option<StoreError>, GenerateError> {
        let spec = generator::seeded(&self.dictionary, letters, required)?;
        self.state = GameState::new(spec);
        Ok(persist(&mut self.store, &self.state).err())
    }

    /// Submit a word; persist on acceptance
    pub fn submit_word(&mut self, raw: &str) -> Submitted {
        let result = submit(&mut self.state, raw);

        let persist_warning = if result.is_accepted() {
            persist(&mut self.store, &self.state).err()
        } else {
            None
        };

        Submitted {
            result,
            persist_warning,
        }
    }

    /// Shuffle the letter display order and persist the new order
    pub fn shuffle(&mut self) -> Option<StoreError> {
        self.state.shuffle_letters(&mut self.rng);
        persist(&mut self.store, &self.state).err()
    }

    /// Share token for the current puzzle (no progress included)
    #[must_use]
    pub fn share_token(&self) -> String {
        share::encode(self.state.spec())
    }

    /// The current game state
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }
}
