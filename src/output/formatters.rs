//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore};
use crate::game::{Board, KEY_ROWS, letter_hints};
use colored::{ColoredString, Colorize};

/// Color a single uppercase letter tile by its score
#[must_use]
pub fn tile(letter: u8, score: LetterScore) -> ColoredString {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match score {
        LetterScore::Correct => text.black().on_green(),
        LetterScore::WrongLocation => text.black().on_yellow(),
        LetterScore::NotPresent => text.white().on_bright_black(),
        LetterScore::Unknown => text.normal(),
    }
}

/// Format a scored guess as a row of colored tiles
#[must_use]
pub fn feedback_row(guess: &str, feedback: &Feedback) -> String {
    guess
        .bytes()
        .zip(feedback.scores())
        .map(|(letter, &score)| tile(letter, score).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the on-screen keyboard with per-letter hints, one QWERTY row per line
#[must_use]
pub fn keyboard_rows(board: &Board) -> Vec<String> {
    let hints = letter_hints(board);

    KEY_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys = row
                .bytes()
                .map(|letter| {
                    let score = hints.get(&letter).copied().unwrap_or(LetterScore::Unknown);
                    tile(letter, score).to_string()
                })
                .collect::<Vec<_>>()
                .join("");
            // Stagger like a physical keyboard
            format!("{}{keys}", "  ".repeat(i))
        })
        .collect()
}

/// The shareable result grid: header plus one emoji row per guess
///
/// # Examples
/// ```
/// use wordle_tui::core::{Feedback, Word};
/// use wordle_tui::output::formatters::share_grid;
///
/// let win = Feedback::score(&Word::new("crane").unwrap(), &Word::new("crane").unwrap());
/// let grid = share_grid(&[win], true);
/// assert!(grid.starts_with("Wordle 1/6"));
/// ```
#[must_use]
pub fn share_grid(feedbacks: &[Feedback], won: bool) -> String {
    let header = if won {
        format!("Wordle {}/6", feedbacks.len())
    } else {
        "Wordle X/6".to_string()
    };

    let mut grid = header;
    for feedback in feedbacks {
        grid.push('\n');
        grid.push_str(&feedback.to_emoji());
    }
    grid
}
