//! Terminal output formatting
//!
//! Display utilities for the CLI; the game core never prints.

pub mod display;
pub mod formatters;

pub use display::{
    print_complete, print_found, print_outcome, print_pangrams, print_puzzle,
    print_save_warning, print_share_token,
};
