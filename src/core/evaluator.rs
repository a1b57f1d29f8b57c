//! Guess evaluation
//!
//! Classifies every letter of a guess against the answer and folds the result
//! into the keyboard state.

use super::{GuessRow, KeyboardState, LetterClassification, Word};

/// Stateless guess evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct GuessEvaluator;

impl GuessEvaluator {
    /// Classify each position of `guess` against `answer`
    ///
    /// Positions are judged independently:
    /// 1. Same letter at the same position: Correct
    /// 2. Letter occurs anywhere in the answer: Present
    /// 3. Otherwise: Absent
    ///
    /// Step 2 is a plain membership test. A letter that occurs once in the
    /// answer is reported Present at every misplaced occurrence in the guess;
    /// there is no per-letter count limiting how many cells turn yellow.
    ///
    /// # Examples
    /// ```
    /// use sedle::core::{GuessEvaluator, LetterClassification, Word};
    ///
    /// let guess = Word::new("death").unwrap();
    /// let answer = Word::new("bread").unwrap();
    /// let cells = GuessEvaluator::classify(&guess, &answer);
    ///
    /// assert_eq!(cells, LetterClassification::parse_pattern("YYY--").unwrap());
    /// ```
    #[must_use]
    pub fn classify(guess: &Word, answer: &Word) -> Vec<LetterClassification> {
        debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

        guess
            .chars()
            .iter()
            .zip(answer.chars())
            .map(|(&letter, &expected)| {
                if letter == expected {
                    LetterClassification::Correct
                } else if answer.has_letter(letter) {
                    LetterClassification::Present
                } else {
                    LetterClassification::Absent
                }
            })
            .collect()
    }

    /// Evaluate a guess and update the keyboard with its letters
    pub fn evaluate(guess: Word, answer: &Word, keyboard: &mut KeyboardState) -> GuessRow {
        let cells = Self::classify(&guess, answer);
        let row = GuessRow::new(guess, cells);
        keyboard.absorb(&row);
        row
    }
}
