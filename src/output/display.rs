//! Display functions for game state and submission outcomes

use super::formatters::{create_progress_bar, letters_line, outcome_message, rank_name};
use crate::core::{is_pangram, score};
use crate::game::{GameState, SubmitResult};
use crate::store::StoreError;
use colored::Colorize;

/// Print a non-fatal persistence failure
///
/// The in-memory game is intact; only the snapshot write failed.
pub fn print_save_warning(warning: &StoreError) {
    println!(
        "  {} Could not save progress: {warning}",
        "⚠".yellow().bold()
    );
}

/// Print the puzzle header: letters, counts, score, and rank
pub fn print_puzzle(state: &GameState) {
    let spec = state.spec();
    let max_score = spec.max_score();

    println!("\n{}", "─".repeat(60).cyan());
    println!("  {}", letters_line(spec.letters(), spec.required()));
    println!("{}", "─".repeat(60).cyan());
    println!(
        "  Words: {} / {}    Score: {} / {}    Rank: {}",
        state.found_count().to_string().bright_white().bold(),
        spec.valid_words().len(),
        state.total_score().to_string().bright_white().bold(),
        max_score,
        rank_name(state.total_score(), max_score).bright_cyan().bold()
    );
    println!(
        "  {}",
        create_progress_bar(f64::from(state.total_score()), f64::from(max_score), 40)
    );
}

/// Print the outcome of one submission
pub fn print_outcome(result: SubmitResult, letter_count: usize, word: &str) {
    match result {
        SubmitResult::Accepted { score } => {
            if is_pangram(word, letter_count) {
                println!(
                    "\n  {} {} (+{})",
                    "🎉 PANGRAM!".bright_yellow().bold(),
                    word.to_uppercase().bright_white().bold(),
                    score.to_string().bright_green().bold()
                );
            } else {
                println!(
                    "\n  {} {} (+{})",
                    "✓".green().bold(),
                    word.to_uppercase().bright_white(),
                    score.to_string().green()
                );
            }
        }
        SubmitResult::Empty => {}
        rejection => {
            if let Some(message) = outcome_message(rejection) {
                println!("\n  {} {}", "✗".red().bold(), message.red());
            }
        }
    }
}

/// Print every found word with its score, alphabetically
pub fn print_found(state: &GameState) {
    if state.found_words().is_empty() {
        println!("\n  No words found yet.");
        return;
    }

    let letter_count = state.spec().letter_count();
    let mut words: Vec<&String> = state.found_words().iter().collect();
    words.sort();

    println!("\n  Found words:");
    for word in words {
        let word_score = score(word, letter_count);
        if is_pangram(word, letter_count) {
            println!(
                "    {} ({word_score}) {}",
                word.bright_yellow().bold(),
                "pangram".bright_yellow()
            );
        } else {
            println!("    {word} ({word_score})");
        }
    }
}

/// Print the puzzle's pangrams (spoilers, on request only)
pub fn print_pangrams(state: &GameState) {
    let pangrams = state.spec().pangrams();
    println!("\n  Puzzle pangrams:");
    for word in pangrams {
        println!("    {}", word.bright_yellow().bold());
    }
}

/// Print the share token for the current puzzle
pub fn print_share_token(token: &str) {
    println!("\n  Share this puzzle (progress not included):");
    println!("  {}", token.bright_white());
}

/// Print the celebration when every word is found
pub fn print_complete(state: &GameState) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊  P U Z Z L E   C O M P L E T E !  🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Every word found: {} words, {} points.",
        state.found_count().to_string().bright_cyan().bold(),
        state.total_score().to_string().bright_cyan().bold()
    );
}
