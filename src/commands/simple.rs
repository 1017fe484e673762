//! Simple interactive CLI mode
//!
//! Line-oriented game without the TUI: type a whole word per turn.

use crate::core::{Feedback, Word};
use crate::game::{Game, GameEvent, GameStatus, Outcome, ROWS};
use crate::output::formatters::{feedback_row, keyboard_rows, share_grid};
use crate::words::Lexicon;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if no answer can be drawn from the lexicon or if
/// reading user input fails.
pub fn run_simple(lexicon: &Lexicon) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Terminal Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden five-letter word in six tries.");
    println!("After each guess the letters are colored:\n");
    println!("  {} letter in the correct position", " G ".black().on_green());
    println!("  {} letter in the word, wrong position", " Y ".black().on_yellow());
    println!(
        "  {} letter not in the word\n",
        " - ".white().on_bright_black()
    );
    println!("Commands: 'quit' to exit, 'new' for a fresh word\n");

    let mut game = new_game(lexicon)?;
    let mut history: Vec<Feedback> = Vec::new();

    loop {
        let turn = game.guesses_used() + 1;
        let input = get_user_input(&format!("Guess {turn}/{ROWS}"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game = new_game(lexicon)?;
                history.clear();
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        let Ok(guess) = Word::new(input.as_str()) else {
            println!("{}\n", "Please enter exactly five letters.".red());
            continue;
        };

        let (next, outcome) = submit_word(&game, &guess, lexicon);
        match outcome {
            Outcome::Rejected => {
                println!(
                    "{}\n",
                    format!("'{}' is not in the word list!", guess.text().to_uppercase()).red()
                );
                continue;
            }
            Outcome::Scored(feedback) => {
                game = next;
                history.push(feedback);

                println!("\n{}\n", feedback_row(guess.text(), &feedback));
                for row in keyboard_rows(game.board()) {
                    println!("{row}");
                }
                println!();
            }
            Outcome::Ignored | Outcome::Edited => continue,
        }

        match game.status() {
            GameStatus::Active => {}
            GameStatus::Won => {
                print_victory(&history);
                if !play_again(&mut game, &mut history, lexicon)? {
                    return Ok(());
                }
            }
            GameStatus::Lost => {
                if let Some(message) = game.message() {
                    println!("{}", message.red().bold());
                }
                println!("\n{}\n", share_grid(&history, false));
                if !play_again(&mut game, &mut history, lexicon)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Feed a whole word through the state machine and submit it
///
/// On rejection the typed letters are discarded along with the candidate
/// state, so the caller's game is untouched.
fn submit_word(game: &Game, guess: &Word, lexicon: &Lexicon) -> (Game, Outcome) {
    let mut state = game.clone();
    for &letter in guess.letters() {
        state = state.apply(GameEvent::Letter(char::from(letter)), lexicon).0;
    }

    let (next, outcome) = state.apply(GameEvent::Submit, lexicon);
    match outcome {
        Outcome::Scored(_) => (next, outcome),
        _ => (game.clone(), outcome),
    }
}

fn new_game(lexicon: &Lexicon) -> Result<Game> {
    let secret = lexicon
        .pick_answer(&mut rand::rng())
        .context("word list contains no answers")?;
    Ok(Game::new(secret.clone()))
}

fn print_victory(history: &[Feedback]) {
    let turns = history.len();

    println!("{}", "═".repeat(64).bright_cyan());
    println!(
        "{}",
        "            🎉  W O R D L E   S O L V E D !  🎉            "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(64).bright_cyan());

    let performance = match turns {
        1 => "🏆 Perfect! Incredible hole-in-one!",
        2 => "⭐ Excellent! Outstanding performance!",
        3 => "💫 Great! Very well played!",
        4 => "✨ Good! Nice work!",
        5 => "👍 Solved! Got it!",
        _ => "✓ Complete! Success!",
    };
    println!("\n  {}", performance.bright_yellow().bold());
    println!(
        "\n  Solution found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n{}\n", share_grid(history, true));
}

fn play_again(game: &mut Game, history: &mut Vec<Feedback>, lexicon: &Lexicon) -> Result<bool> {
    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            *game = new_game(lexicon)?;
            history.clear();
            println!("\n🔄 New game started!\n");
            Ok(true)
        }
        _ => {
            println!("\n👋 Thanks for playing!\n");
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
