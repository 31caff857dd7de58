//! Buzzwords
//!
//! A spelling-bee style word puzzle engine: form words from a small set of
//! letters, every word must use the required letter, pangrams score extra.
//! Games persist after every accepted word and can be shared as URL-safe
//! tokens that reconstruct the same puzzle elsewhere.
//!
//! # Quick Start
//!
//! ```rust
//! use buzzwords::game::{GameState, SubmitResult, submit};
//! use buzzwords::puzzle::generator;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let dictionary: Vec<String> = ["cats", "coast", "coats", "tacos"]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let spec = generator::generate(&dictionary, 5, &mut rng).unwrap();
//! let mut state = GameState::new(spec);
//!
//! if let SubmitResult::Accepted { score } = submit(&mut state, "tacos") {
//!     println!("+{score}");
//! }
//! ```

// Core domain types
pub mod core;

// Puzzle definition and generation
pub mod puzzle;

// Game session state and submission protocol
pub mod game;

// Snapshot persistence and shareable tokens
pub mod store;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
