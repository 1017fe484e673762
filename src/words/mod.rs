//! Word lists and the lexicon
//!
//! Provides embedded word lists compiled into the binary for zero-cost
//! access, plus the [`Lexicon`] the game draws answers from and validates
//! guesses against.

mod embedded;
mod lexicon;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use lexicon::Lexicon;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All answers should be 5 letters, lowercase
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn allowed_are_valid_words() {
        for &word in ALLOWED {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed_set: std::collections::HashSet<_> = ALLOWED.iter().collect();

        for &answer in ANSWERS {
            assert!(
                allowed_set.contains(&answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(ANSWERS_COUNT, 901, "Expected 901 answer words");
        assert_eq!(ALLOWED_COUNT, 1731, "Expected 1,731 allowed words");
    }
}
