//! Shareable puzzle tokens
//!
//! A token encodes the puzzle definition (letters, required letter,
//! solution set) but no progress: a shared puzzle always starts fresh. The
//! encoding is URL-safe base64 over canonical JSON, fit for a URL fragment.

use crate::core::{LetterSet, LetterSetError};
use crate::puzzle::{PuzzleSpec, SpecError};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire form of a shared puzzle definition
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SharePayload {
    puzzle_letters: Vec<char>,
    required_letter: char,
    puzzle_length: usize,
    valid_words: Vec<String>,
}

/// Error type for malformed share tokens
///
/// Never fatal: the caller falls back to the saved-game or fresh-puzzle
/// path when a token does not decode.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token letter count disagrees with its letter set")]
    LengthMismatch,
    #[error("token letter set is invalid: {0}")]
    InvalidLetters(#[from] LetterSetError),
    #[error("token violates puzzle invariants: {0}")]
    InvalidSpec(#[from] SpecError),
}

/// Encode a puzzle definition as an opaque URL-safe token
#[must_use]
pub fn encode(spec: &PuzzleSpec) -> String {
    let payload = SharePayload {
        puzzle_letters: spec.letters().as_slice().to_vec(),
        required_letter: spec.required(),
        puzzle_length: spec.letter_count(),
        valid_words: spec.valid_words().to_vec(),
    };

    let json = serde_json::to_string(&payload).expect("share payload serialization cannot fail");
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a token back into the puzzle it encodes
///
/// Validates every puzzle invariant on the way in, so a decoded spec is as
/// trustworthy as a generated one.
///
/// # Errors
/// Returns `DecodeError` on bad base64, bad JSON, or a payload that breaks
/// the puzzle invariants.
pub fn decode(token: &str) -> Result<PuzzleSpec, DecodeError> {
    let json = URL_SAFE_NO_PAD.decode(token.trim())?;
    let payload: SharePayload = serde_json::from_slice(&json)?;

    if payload.puzzle_length != payload.puzzle_letters.len() {
        return Err(DecodeError::LengthMismatch);
    }

    let letters = LetterSet::new(payload.puzzle_letters)?;
    Ok(PuzzleSpec::new(
        letters,
        payload.required_letter,
        payload.valid_words,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> PuzzleSpec {
        let letters = LetterSet::new("catsdog".chars()).unwrap();
        let words = ["cats", "coast", "tacos", "catsdog"]
            .iter()
            .map(ToString::to_string);
        PuzzleSpec::new(letters, 'a', words).unwrap()
    }

    #[test]
    fn encode_decode_is_idempotent() {
        let spec = spec();
        let token = encode(&spec);
        let decoded = decode(&token).unwrap();
        assert_eq!(decoded, spec);
    }

    #[test]
    fn token_is_url_safe() {
        let token = encode(&spec());
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn token_preserves_letter_order() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut spec = spec();
        let mut rng = StdRng::seed_from_u64(12);
        spec.shuffle_letters(&mut rng);

        let decoded = decode(&encode(&spec)).unwrap();
        assert_eq!(
            decoded.letters().as_slice(),
            spec.letters().as_slice()
        );
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(decode("not base64!!!"), Err(DecodeError::Base64(_))));

        let not_json = URL_SAFE_NO_PAD.encode("hello");
        assert!(matches!(decode(&not_json), Err(DecodeError::Json(_))));
    }

    #[test]
    fn decode_rejects_length_mismatch() {
        let json = r#"{"puzzleLetters":["c","a","t","s"],"requiredLetter":"a",
                       "puzzleLength":7,"validWords":[]}"#;
        let token = URL_SAFE_NO_PAD.encode(json);
        assert!(matches!(decode(&token), Err(DecodeError::LengthMismatch)));
    }

    #[test]
    fn decode_rejects_invariant_violations() {
        // "dogs" lacks the required letter
        let json = r#"{"puzzleLetters":["c","a","t","s","d","o","g"],
                       "requiredLetter":"a","puzzleLength":7,
                       "validWords":["dogs"]}"#;
        let token = URL_SAFE_NO_PAD.encode(json);
        assert!(matches!(
            decode(&token),
            Err(DecodeError::InvalidSpec(SpecError::WordMissingRequired(_)))
        ));
    }

    #[test]
    fn decode_trims_surrounding_whitespace() {
        let spec = spec();
        let token = format!("  {}\n", encode(&spec));
        assert_eq!(decode(&token).unwrap(), spec);
    }
}
