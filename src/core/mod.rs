//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use word::{WORD_LEN, Word, WordError};
