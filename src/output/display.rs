//! Display functions for command results

use super::formatters::feedback_row;
use crate::core::{Feedback, LetterScore, Word};
use colored::Colorize;

/// Human-readable name for a score
#[must_use]
pub const fn score_name(score: LetterScore) -> &'static str {
    match score {
        LetterScore::Correct => "correct",
        LetterScore::WrongLocation => "wrong location",
        LetterScore::NotPresent => "not present",
        LetterScore::Unknown => "unknown",
    }
}

/// Print the evaluation of one guess against a known answer
pub fn print_score_result(guess: &Word, answer: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "{} vs {}",
        guess.text().to_uppercase().bright_white().bold(),
        answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n{}", feedback_row(guess.text(), feedback));
    println!("{}\n", feedback.to_emoji());

    for (i, &score) in feedback.scores().iter().enumerate() {
        let letter = char::from(guess.letter_at(i)).to_ascii_uppercase();
        let name = match score {
            LetterScore::Correct => score_name(score).green(),
            LetterScore::WrongLocation => score_name(score).yellow(),
            _ => score_name(score).bright_black(),
        };
        println!("  {}. {letter}  {name}", i + 1);
    }
    println!();
}
