//! Guess evaluation
//!
//! Scoring a guess against the hidden answer yields one [`LetterScore`] per
//! position. The two-pass algorithm consumes each answer letter at most once,
//! which is what makes repeated letters come out right: exact matches claim
//! their letter first, and only the leftovers can turn other cells yellow.

use super::Word;
use super::word::WORD_LEN;

/// Per-cell classification of a guessed letter
///
/// Declaration order doubles as display precedence: when a letter appears in
/// several cells, the strongest score wins (`Correct` > `WrongLocation` >
/// `NotPresent` > `Unknown`), so `Ord::max` is the whole precedence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterScore {
    /// Not yet scored (unsubmitted cell)
    Unknown,
    /// Letter does not appear in the remaining answer letters
    NotPresent,
    /// Letter appears in the answer, but at a different position
    WrongLocation,
    /// Letter is in the correct position
    Correct,
}

/// Feedback for one submitted guess: a score for each of the five cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterScore; WORD_LEN]);

impl Feedback {
    /// All greens (winning guess)
    pub const WIN: Self = Self([LetterScore::Correct; WORD_LEN]);

    /// Score `guess` against the hidden `answer`
    ///
    /// # Algorithm
    /// 1. Count the answer's letters into a pool.
    /// 2. First pass: exact position matches score `Correct`, each removing
    ///    one occurrence from the pool.
    /// 3. Second pass: remaining cells score `WrongLocation` if their letter
    ///    survives in the pool (removing one occurrence), else `NotPresent`.
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Feedback, LetterScore, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let feedback = Feedback::score(&guess, &answer);
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// assert_eq!(feedback.get(2), LetterScore::Correct);
    /// assert_eq!(feedback.get(4), LetterScore::Correct);
    /// assert_eq!(feedback.get(0), LetterScore::NotPresent);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut scores = [LetterScore::Unknown; WORD_LEN];
        let mut pool = [0u8; 26];

        for &letter in answer.letters() {
            pool[usize::from(letter - b'a')] += 1;
        }

        // First pass: exact position matches
        // Allow: index needed to access guess[i], answer[i], and set scores[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.letter_at(i) == answer.letter_at(i) {
                scores[i] = LetterScore::Correct;
                pool[usize::from(guess.letter_at(i) - b'a')] -= 1;
            }
        }

        // Second pass: misplaced letters, drawn from what the greens left over
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if scores[i] == LetterScore::Correct {
                continue;
            }
            let slot = &mut pool[usize::from(guess.letter_at(i) - b'a')];
            if *slot > 0 {
                scores[i] = LetterScore::WrongLocation;
                *slot -= 1;
            } else {
                scores[i] = LetterScore::NotPresent;
            }
        }

        Self(scores)
    }

    /// The score at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(self, position: usize) -> LetterScore {
        self.0[position]
    }

    /// All five scores in position order
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LEN] {
        &self.0
    }

    /// Check if every cell is green
    #[inline]
    #[must_use]
    pub fn is_win(self) -> bool {
        self.0.iter().all(|&s| s == LetterScore::Correct)
    }

    /// Convert feedback to the shareable emoji row
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// assert_eq!(Feedback::score(&guess, &answer).to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|score| match score {
                LetterScore::Correct => '🟩',
                LetterScore::WrongLocation => '🟨',
                _ => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn score_row(guess: &str, answer: &str) -> [LetterScore; 5] {
        *Feedback::score(&word(guess), &word(answer)).scores()
    }

    use LetterScore::{Correct, NotPresent, WrongLocation};

    #[test]
    fn all_gray_when_no_letters_shared() {
        assert_eq!(score_row("abide", "crust"), [NotPresent; 5]);
    }

    #[test]
    fn all_green_when_guess_equals_answer() {
        let feedback = Feedback::score(&word("crane"), &word("crane"));
        assert_eq!(feedback, Feedback::WIN);
        assert!(feedback.is_win());
    }

    #[test]
    fn guess_equals_answer_for_repeated_letter_words() {
        for text in ["crane", "slate", "audio", "aaaaa", "llama"] {
            let w = word(text);
            assert!(Feedback::score(&w, &w).is_win());
        }
    }

    #[test]
    fn mixed_feedback() {
        // CRANE vs SLATE: C gray, R gray, A green, N gray, E green
        assert_eq!(
            score_row("crane", "slate"),
            [NotPresent, NotPresent, Correct, NotPresent, Correct]
        );
    }

    #[test]
    fn duplicate_letters_consume_once() {
        // LLAMA vs ALARM: the second L and middle A are exact matches and
        // claim their letters first; the leading L finds no L left.
        assert_eq!(
            score_row("llama", "alarm"),
            [NotPresent, Correct, Correct, WrongLocation, WrongLocation]
        );
    }

    #[test]
    fn duplicate_letters_both_yellow() {
        // SPEED vs ERASE: both E's are misplaced, S misplaced, P and D absent
        assert_eq!(
            score_row("speed", "erase"),
            [
                WrongLocation,
                NotPresent,
                WrongLocation,
                WrongLocation,
                NotPresent
            ]
        );
    }

    #[test]
    fn duplicate_letters_green_and_yellow() {
        // ROBOT vs FLOOR: first O misplaced, second O exact
        assert_eq!(
            score_row("robot", "floor"),
            [
                WrongLocation,
                WrongLocation,
                NotPresent,
                Correct,
                NotPresent
            ]
        );
    }

    #[test]
    fn excess_duplicates_go_gray() {
        // GEESE vs EDGES: the guess has three E's but the answer only two,
        // so the last E finds an empty pool and scores gray
        assert_eq!(
            score_row("geese", "edges"),
            [
                WrongLocation,
                WrongLocation,
                WrongLocation,
                WrongLocation,
                NotPresent
            ]
        );
    }

    #[test]
    fn scoring_is_deterministic() {
        let guess = word("llama");
        let answer = word("alarm");
        assert_eq!(
            Feedback::score(&guess, &answer),
            Feedback::score(&guess, &answer)
        );
    }

    #[test]
    fn no_unknown_after_scoring() {
        for (guess, answer) in [("crane", "slate"), ("llama", "alarm"), ("aaaaa", "bbbbb")] {
            for &score in &score_row(guess, answer) {
                assert_ne!(score, LetterScore::Unknown);
            }
        }
    }

    #[test]
    fn precedence_ordering() {
        assert!(Correct > WrongLocation);
        assert!(WrongLocation > NotPresent);
        assert!(NotPresent > LetterScore::Unknown);
    }

    #[test]
    fn emoji_row() {
        let feedback = Feedback::score(&word("robot"), &word("floor"));
        assert_eq!(feedback.to_emoji(), "🟨🟨⬜🟩⬜");
        assert_eq!(Feedback::WIN.to_emoji(), "🟩🟩🟩🟩🟩");
    }
}
