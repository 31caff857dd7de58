//! Formatting utilities for terminal output

use crate::core::LetterSet;
use crate::game::SubmitResult;
use colored::Colorize;

/// Format the puzzle letters with the required letter highlighted
#[must_use]
pub fn letters_line(letters: &LetterSet, required: char) -> String {
    letters
        .as_slice()
        .iter()
        .map(|&c| {
            let upper = c.to_uppercase().to_string();
            if c == required {
                format!("[{}]", upper.bright_yellow().bold())
            } else {
                format!(" {} ", upper.bright_white())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Rank name for a score against the puzzle maximum
///
/// Thresholds are percentages of the maximum score, from newcomer to a
/// perfect clear.
#[must_use]
pub fn rank_name(score: u32, max_score: u32) -> &'static str {
    if max_score == 0 {
        return "Beginner";
    }

    let percent = f64::from(score) / f64::from(max_score) * 100.0;

    match percent {
        p if p >= 100.0 => "Perfect",
        p if p >= 70.0 => "Genius",
        p if p >= 50.0 => "Amazing",
        p if p >= 40.0 => "Great",
        p if p >= 25.0 => "Solid",
        p if p >= 15.0 => "Good",
        p if p >= 8.0 => "Moving Up",
        p if p >= 2.0 => "Good Start",
        _ => "Beginner",
    }
}

/// User-facing message for a submission outcome, `None` for empty input
#[must_use]
pub const fn outcome_message(result: SubmitResult) -> Option<&'static str> {
    match result {
        SubmitResult::Empty => None,
        SubmitResult::RejectedInvalidSymbol => Some("Invalid letters"),
        SubmitResult::RejectedMissingRequired => Some("Missing the required letter"),
        SubmitResult::RejectedTooShort => Some("Too short"),
        SubmitResult::RejectedDuplicate => Some("Already found"),
        SubmitResult::RejectedNotInDictionary => Some("Invalid word"),
        SubmitResult::Accepted { .. } => Some("Accepted"),
    }
}
