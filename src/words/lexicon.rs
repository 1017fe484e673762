//! The lexicon: answer pool and allowed-guess set
//!
//! The game consults the lexicon in exactly two places: drawing a fresh
//! secret at game start, and validating a submitted guess. The allowed set
//! is always a superset of the answer pool.

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Answer pool plus allowed-guess set
#[derive(Debug, Clone)]
pub struct Lexicon {
    answers: Vec<Word>,
    allowed: FxHashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from answer and allowed word collections
    ///
    /// Answers are merged into the allowed set, so an answer is always a
    /// legal guess even if the allowed list omits it.
    #[must_use]
    pub fn new(answers: Vec<Word>, allowed: Vec<Word>) -> Self {
        let mut allowed_set: FxHashSet<String> =
            allowed.into_iter().map(|w| w.text().to_string()).collect();
        for answer in &answers {
            allowed_set.insert(answer.text().to_string());
        }

        Self {
            answers,
            allowed: allowed_set,
        }
    }

    /// Build a lexicon from raw string slices, skipping invalid entries
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::words::Lexicon;
    ///
    /// let lexicon = Lexicon::from_lists(&["crane"], &["crane", "slate"]);
    /// assert_eq!(lexicon.answer_count(), 1);
    /// ```
    #[must_use]
    pub fn from_lists(answers: &[&str], allowed: &[&str]) -> Self {
        Self::new(
            super::loader::words_from_slice(answers),
            super::loader::words_from_slice(allowed),
        )
    }

    /// The lexicon compiled into the binary
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            super::loader::words_from_slice(super::ANSWERS),
            super::loader::words_from_slice(super::ALLOWED),
        )
    }

    /// Is this word an accepted guess?
    #[inline]
    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed.contains(word.text())
    }

    /// Draw a random answer, or None if the answer pool is empty
    pub fn pick_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.answers.choose(rng)
    }

    /// Number of possible answers
    #[inline]
    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of accepted guess words
    #[inline]
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }
}
