//! Word scoring
//!
//! Pure scoring rules: four-letter words score 1, longer words score their
//! length, and a pangram (a word using every puzzle letter) earns a bonus
//! equal to the puzzle's letter count.

use rustc_hash::FxHashSet;

/// Shortest word the puzzle accepts
pub const MIN_WORD_LEN: usize = 4;

/// Count the distinct symbols in a word
#[must_use]
pub fn distinct_count(word: &str) -> usize {
    let set: FxHashSet<char> = word.chars().collect();
    set.len()
}

/// True if the word's distinct-symbol count equals the puzzle letter count
///
/// Pangram status depends only on the word itself, not on how the puzzle
/// was generated.
#[must_use]
pub fn is_pangram(word: &str, puzzle_letter_count: usize) -> bool {
    distinct_count(word) == puzzle_letter_count
}

/// Score a word against a puzzle of the given letter count
///
/// Words shorter than [`MIN_WORD_LEN`] score 0 (a defensive floor; the
/// submission protocol rejects them before scoring). A four-letter word
/// scores 1, longer words score their length in symbols, and a pangram adds
/// `puzzle_letter_count` on top.
///
/// # Examples
/// ```
/// use buzzwords::core::score;
///
/// assert_eq!(score("cats", 7), 1);
/// assert_eq!(score("coast", 7), 5);
/// // 7 distinct letters in a 7-letter puzzle: 7 + 7
/// assert_eq!(score("kitchen", 7), 14);
/// ```
#[must_use]
pub fn score(word: &str, puzzle_letter_count: usize) -> u32 {
    let len = word.chars().count();
    if len < MIN_WORD_LEN {
        return 0;
    }

    let mut score = if len == MIN_WORD_LEN { 1 } else { len as u32 };

    if is_pangram(word, puzzle_letter_count) {
        score += puzzle_letter_count as u32;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_score_zero() {
        assert_eq!(score("", 7), 0);
        assert_eq!(score("at", 7), 0);
        assert_eq!(score("cat", 7), 0);
    }

    #[test]
    fn four_letter_word_scores_one() {
        assert_eq!(score("cats", 7), 1);
        assert_eq!(score("door", 7), 1);
    }

    #[test]
    fn longer_words_score_length() {
        assert_eq!(score("coast", 7), 5);
        assert_eq!(score("animal", 7), 6);
        assert_eq!(score("mountain", 9), 8);
    }

    #[test]
    fn pangram_bonus_adds_letter_count() {
        // "kitchen" has 7 distinct letters
        assert_eq!(score("kitchen", 7), 7 + 7);
        // Same word in an 8-letter puzzle gets no bonus
        assert_eq!(score("kitchen", 8), 7);
    }

    #[test]
    fn four_letter_pangram_scores_one_plus_bonus() {
        // "cats" has 4 distinct letters
        assert_eq!(score("cats", 4), 1 + 4);
    }

    #[test]
    fn repeated_letters_do_not_count_twice() {
        // "assess" -> {a, s, e}
        assert_eq!(distinct_count("assess"), 3);
        assert_eq!(distinct_count("kitchen"), 7);
        assert_eq!(distinct_count(""), 0);
    }

    #[test]
    fn pangram_check_is_exact() {
        assert!(is_pangram("kitchen", 7));
        assert!(!is_pangram("kitchen", 6));
        assert!(!is_pangram("kitchen", 8));
    }
}
