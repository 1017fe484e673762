//! On-screen keyboard hints
//!
//! Each letter the player has used gets one aggregate score. Precedence is
//! the `LetterScore` ordering (`Correct` > `WrongLocation` > `NotPresent` >
//! `Unknown`), applied as a max-reduce over every cell sharing the letter,
//! so a letter that was green anywhere stays green even if a later guess
//! placed it wrong.

use super::board::Board;
use crate::core::LetterScore;
use rustc_hash::FxHashMap;

/// QWERTY rows for keyboard rendering
pub const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Aggregate the board's cell scores into one hint per used letter
///
/// Letters never entered are absent from the map; callers treat them as
/// [`LetterScore::Unknown`].
#[must_use]
pub fn letter_hints(board: &Board) -> FxHashMap<u8, LetterScore> {
    let mut hints: FxHashMap<u8, LetterScore> = FxHashMap::default();

    for row in board.rows() {
        for cell in row {
            if let Some(letter) = cell.letter {
                let entry = hints.entry(letter).or_insert(LetterScore::Unknown);
                *entry = (*entry).max(cell.score);
            }
        }
    }

    hints
}
