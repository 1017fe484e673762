//! One-shot guess scoring
//!
//! Evaluates a guess against a known answer and prints the classification.
//! Useful for checking how a specific duplicate-letter case scores.

use crate::core::{Feedback, Word};
use crate::output::print_score_result;
use anyhow::{Result, anyhow};

/// Result of scoring one guess against one answer
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either string is not a valid five-letter word.
pub fn score_words(guess: &str, answer: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).map_err(|e| anyhow!("invalid guess: {e}"))?;
    let answer = Word::new(answer).map_err(|e| anyhow!("invalid answer: {e}"))?;
    let feedback = Feedback::score(&guess, &answer);

    Ok(ScoreResult {
        guess,
        answer,
        feedback,
    })
}

/// Run the score command end to end
///
/// # Errors
///
/// Returns an error if either word fails validation.
pub fn run_score(guess: &str, answer: &str) -> Result<()> {
    let result = score_words(guess, answer)?;
    print_score_result(&result.guess, &result.answer, &result.feedback);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterScore;

    #[test]
    fn scores_valid_words() {
        let result = score_words("crane", "slate").unwrap();
        assert_eq!(result.feedback.get(2), LetterScore::Correct);
        assert_eq!(result.feedback.get(0), LetterScore::NotPresent);
    }

    #[test]
    fn normalizes_case() {
        let result = score_words("CRANE", "crane").unwrap();
        assert!(result.feedback.is_win());
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(score_words("cranes", "slate").is_err());
        assert!(score_words("crane", "sl8te").is_err());
    }
}
