//! Aggregate per-key feedback for the on-screen keyboard

use super::{GuessRow, LetterClassification};
use rustc_hash::FxHashMap;

/// Best classification seen for each letter during one round
///
/// A key only ever moves up the precedence order: once Correct it stays
/// Correct, once Present it never drops back to Absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: FxHashMap<u8, LetterClassification>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one observation for `letter`, keeping the stronger hint
    pub fn mark(&mut self, letter: u8, classification: LetterClassification) {
        let letter = letter.to_ascii_lowercase();
        self.keys
            .entry(letter)
            .and_modify(|best| *best = (*best).max(classification))
            .or_insert(classification);
    }

    /// Merge every letter of an evaluated row
    pub fn absorb(&mut self, row: &GuessRow) {
        for (letter, classification) in row.letters() {
            self.mark(letter, classification);
        }
    }

    /// Classification for a key, or `None` if it has not been guessed yet
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterClassification> {
        self.keys.get(&letter.to_ascii_lowercase()).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
