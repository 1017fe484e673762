//! The game state machine
//!
//! All input funnels through [`Game::apply`], a pure reducer: it never
//! mutates, it returns the successor state plus an [`Outcome`] describing
//! what happened so the caller can drive presentation (flash on a rejected
//! guess, celebrate on a win) without peeking at internals.

use super::board::{Board, COLS, ROWS};
use crate::core::{Feedback, Word};
use crate::words::Lexicon;

/// Player input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A letter key (any alphabetic character; normalized to lowercase)
    Letter(char),
    /// Remove the last entered letter of the active row
    Backspace,
    /// Submit the active row as a guess
    Submit,
}

/// What a state transition did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The event had no effect (cursor at a boundary, game over, ...)
    Ignored,
    /// A letter was written or erased
    Edited,
    /// The submitted word is not in the lexicon; nothing changed
    Rejected,
    /// The guess was scored and written into the board
    Scored(Feedback),
}

/// Whether the game is still accepting guesses, and how it ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

/// One game in progress: secret word, grid, cursor, status
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    board: Board,
    row: usize,
    col: usize,
    status: GameStatus,
}

impl Game {
    /// Start a game against the given secret word
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            board: Board::new(),
            row: 0,
            col: 0,
            status: GameStatus::Active,
        }
    }

    /// Apply one input event, producing the successor state
    ///
    /// The lexicon is consulted only on submit, to reject guesses that are
    /// not real words. A rejected guess consumes no turn and changes
    /// nothing; the `Rejected` outcome exists so the UI can flash a cue.
    #[must_use]
    pub fn apply(&self, event: GameEvent, lexicon: &Lexicon) -> (Self, Outcome) {
        let mut next = self.clone();

        if !next.status.is_active() {
            return (next, Outcome::Ignored);
        }

        let outcome = match event {
            GameEvent::Letter(c) => next.enter_letter(c),
            GameEvent::Backspace => next.erase_letter(),
            GameEvent::Submit => next.submit_row(lexicon),
        };

        (next, outcome)
    }

    fn enter_letter(&mut self, c: char) -> Outcome {
        if !c.is_ascii_alphabetic() || self.col >= COLS || self.row >= ROWS {
            return Outcome::Ignored;
        }

        self.board
            .set_letter(self.row, self.col, c.to_ascii_lowercase() as u8);
        self.col += 1;
        Outcome::Edited
    }

    fn erase_letter(&mut self) -> Outcome {
        if self.col == 0 {
            return Outcome::Ignored;
        }

        self.col -= 1;
        self.board.clear_letter(self.row, self.col);
        Outcome::Edited
    }

    fn submit_row(&mut self, lexicon: &Lexicon) -> Outcome {
        if self.col < COLS {
            return Outcome::Ignored;
        }

        // A full row of entered letters always forms a well-formed word
        let Some(text) = self.board.row_text(self.row) else {
            return Outcome::Ignored;
        };
        let Ok(guess) = Word::new(text) else {
            return Outcome::Ignored;
        };

        if !lexicon.is_allowed(&guess) {
            return Outcome::Rejected;
        }

        let feedback = Feedback::score(&guess, &self.secret);
        self.board.apply_feedback(self.row, &feedback);

        if feedback.is_win() {
            self.status = GameStatus::Won;
        } else if self.row == ROWS - 1 {
            self.status = GameStatus::Lost;
        }

        self.row += 1;
        self.col = 0;

        Outcome::Scored(feedback)
    }

    /// The guess grid
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Active (row, column) cursor
    ///
    /// After a winning submit on the last row the row index may equal 6; no
    /// transition writes through the cursor once the game is over.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The hidden answer
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Number of guesses submitted so far
    #[inline]
    #[must_use]
    pub const fn guesses_used(&self) -> usize {
        self.row
    }

    /// The game-over message, if the game has ended
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.status {
            GameStatus::Active => None,
            GameStatus::Won => Some("Great job!".to_string()),
            GameStatus::Lost => Some(format!(
                "Sorry! The word was {}",
                self.secret.text().to_uppercase()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterScore;
    use crate::words::Lexicon;

    fn lexicon() -> Lexicon {
        Lexicon::from_lists(
            &["crane", "slate", "alarm"],
            &["crane", "slate", "alarm", "llama", "irate"],
        )
    }

    fn game(secret: &str) -> Game {
        Game::new(Word::new(secret).unwrap())
    }

    fn type_word(game: &Game, text: &str, lexicon: &Lexicon) -> Game {
        let mut state = game.clone();
        for c in text.chars() {
            state = state.apply(GameEvent::Letter(c), lexicon).0;
        }
        state
    }

    #[test]
    fn letters_fill_the_active_row() {
        let lex = lexicon();
        let state = type_word(&game("slate"), "crane", &lex);

        assert_eq!(state.cursor(), (0, 5));
        assert_eq!(state.board().row_text(0).as_deref(), Some("crane"));
    }

    #[test]
    fn sixth_letter_is_a_noop() {
        let lex = lexicon();
        let state = type_word(&game("slate"), "crane", &lex);
        let (next, outcome) = state.apply(GameEvent::Letter('x'), &lex);

        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(next.cursor(), (0, 5));
        assert_eq!(next.board().row_text(0).as_deref(), Some("crane"));
    }

    #[test]
    fn non_alphabetic_input_is_ignored() {
        let lex = lexicon();
        let (next, outcome) = game("slate").apply(GameEvent::Letter('3'), &lex);
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(next.cursor(), (0, 0));
    }

    #[test]
    fn backspace_retreats_and_clears() {
        let lex = lexicon();
        let state = type_word(&game("slate"), "cra", &lex);
        let (next, outcome) = state.apply(GameEvent::Backspace, &lex);

        assert_eq!(outcome, Outcome::Edited);
        assert_eq!(next.cursor(), (0, 2));
        assert!(next.board().cell(0, 2).is_empty());
    }

    #[test]
    fn backspace_at_column_zero_is_a_noop() {
        let lex = lexicon();
        let (next, outcome) = game("slate").apply(GameEvent::Backspace, &lex);
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(next.cursor(), (0, 0));
    }

    #[test]
    fn submit_requires_a_full_row() {
        let lex = lexicon();
        let state = type_word(&game("slate"), "cra", &lex);
        let (next, outcome) = state.apply(GameEvent::Submit, &lex);

        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(next.cursor(), (0, 3));
    }

    #[test]
    fn unknown_word_is_rejected_without_consuming_the_turn() {
        let lex = lexicon();
        let state = type_word(&game("slate"), "zzzzz", &lex);
        let (next, outcome) = state.apply(GameEvent::Submit, &lex);

        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(next.cursor(), (0, 5));
        assert_eq!(next.board().row_text(0).as_deref(), Some("zzzzz"));
        assert!(next.status().is_active());
        // Still unscored
        assert_eq!(next.board().cell(0, 0).score, LetterScore::Unknown);
    }

    #[test]
    fn valid_guess_scores_and_advances() {
        let lex = lexicon();
        let state = type_word(&game("slate"), "crane", &lex);
        let (next, outcome) = state.apply(GameEvent::Submit, &lex);

        let Outcome::Scored(feedback) = outcome else {
            panic!("expected a scored outcome, got {outcome:?}");
        };
        assert!(!feedback.is_win());
        assert_eq!(next.cursor(), (1, 0));
        assert!(next.status().is_active());
        assert_eq!(next.board().cell(0, 2).score, LetterScore::Correct);
    }

    #[test]
    fn correct_guess_wins() {
        let lex = lexicon();
        let state = type_word(&game("slate"), "slate", &lex);
        let (next, outcome) = state.apply(GameEvent::Submit, &lex);

        assert_eq!(outcome, Outcome::Scored(Feedback::WIN));
        assert_eq!(next.status(), GameStatus::Won);
        assert_eq!(next.message().as_deref(), Some("Great job!"));
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let lex = lexicon();
        let mut state = game("slate");
        for turn in 0..6 {
            state = type_word(&state, "crane", &lex);
            let (next, outcome) = state.apply(GameEvent::Submit, &lex);
            assert!(matches!(outcome, Outcome::Scored(_)), "turn {turn}");
            state = next;
        }

        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(state.guesses_used(), 6);
        assert_eq!(
            state.message().as_deref(),
            Some("Sorry! The word was SLATE")
        );
    }

    #[test]
    fn win_on_the_last_row() {
        let lex = lexicon();
        let mut state = game("slate");
        for _ in 0..5 {
            state = type_word(&state, "crane", &lex);
            state = state.apply(GameEvent::Submit, &lex).0;
        }
        state = type_word(&state, "slate", &lex);
        let (next, _) = state.apply(GameEvent::Submit, &lex);

        assert_eq!(next.status(), GameStatus::Won);
    }

    #[test]
    fn input_after_game_over_is_ignored() {
        let lex = lexicon();
        let state = type_word(&game("slate"), "slate", &lex);
        let won = state.apply(GameEvent::Submit, &lex).0;

        for event in [
            GameEvent::Letter('a'),
            GameEvent::Backspace,
            GameEvent::Submit,
        ] {
            let (next, outcome) = won.apply(event, &lex);
            assert_eq!(outcome, Outcome::Ignored);
            assert_eq!(next.cursor(), won.cursor());
        }
    }

    #[test]
    fn scored_rows_stay_frozen() {
        let lex = lexicon();
        let state = type_word(&game("slate"), "crane", &lex);
        let state = state.apply(GameEvent::Submit, &lex).0;

        // Backspace on the fresh row must not reach back into row 0
        let (next, outcome) = state.apply(GameEvent::Backspace, &lex);
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(next.board().row_text(0).as_deref(), Some("crane"));
    }

    #[test]
    fn uppercase_input_is_normalized() {
        let lex = lexicon();
        let state = type_word(&game("slate"), "CRANE", &lex);
        assert_eq!(state.board().row_text(0).as_deref(), Some("crane"));
    }
}
