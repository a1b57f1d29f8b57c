//! Single guess check command
//!
//! Classifies one guess against one answer without playing a round.

use crate::core::{GuessEvaluator, GuessRow, KeyboardState, Word};

/// Result of checking a guess
#[derive(Debug)]
pub struct CheckResult {
    pub row: GuessRow,
    pub answer: Word,
}

/// Classify `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn check_guess(guess: &str, answer: &str) -> Result<CheckResult, String> {
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;
    let guess =
        Word::with_length(guess, answer.len()).map_err(|e| format!("Invalid guess: {e}"))?;

    let row = GuessEvaluator::evaluate(guess, &answer, &mut KeyboardState::new());
    Ok(CheckResult { row, answer })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterClassification;

    #[test]
    fn check_death_against_bread() {
        let result = check_guess("DEATH", "bread").unwrap();
        assert_eq!(result.answer.text(), "bread");
        assert_eq!(
            result.row.cells(),
            LetterClassification::parse_pattern("YYY--").unwrap().as_slice()
        );
    }

    #[test]
    fn check_rejects_length_mismatch() {
        let err = check_guess("bred", "bread").unwrap_err();
        assert_eq!(err, "Invalid guess: Word must be exactly 5 letters, got 4");
    }

    #[test]
    fn check_rejects_invalid_answer() {
        assert!(check_guess("bread", "br3ad").is_err());
    }
}
