//! Terminal Wordle - CLI
//!
//! Wordle in the terminal with TUI and plain CLI modes.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use wordle_tui::{
    commands::{run_score, run_simple},
    interactive::{App, run_tui},
    words::{ALLOWED, Lexicon, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Play Wordle in your terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a custom answers file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode (type one word per turn, no TUI)
    Simple,

    /// Score a guess against a known answer
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },
}

/// Build the lexicon from the -w flag
///
/// - "builtin": the embedded answer and allowed lists
/// - "<path>": answers loaded from the file, merged with the embedded
///   allowed list so custom answers are always legal guesses
fn load_lexicon(wordlist_mode: &str) -> Result<Lexicon> {
    match wordlist_mode {
        "builtin" => Ok(Lexicon::builtin()),
        path => {
            let answers = loader::load_from_file(path)
                .with_context(|| format!("failed to read wordlist {path}"))?;
            ensure!(
                !answers.is_empty(),
                "no valid five-letter words in {path}"
            );

            Ok(Lexicon::new(answers, loader::words_from_slice(ALLOWED)))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let lexicon = load_lexicon(&cli.wordlist)?;
            run_tui(App::new(lexicon)?)
        }
        Commands::Simple => {
            let lexicon = load_lexicon(&cli.wordlist)?;
            run_simple(&lexicon)
        }
        Commands::Score { guess, answer } => run_score(&guess, &answer),
    }
}
