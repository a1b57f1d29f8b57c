//! Per-letter feedback for a submitted guess
//!
//! Each position of a guess is classified as:
//! - Absent (letter not in the answer)
//! - Present (letter in the answer, different position)
//! - Correct (same letter at the same position)
//!
//! Variants are ordered by precedence, so `max` picks the stronger hint.

use super::Word;
use std::fmt;

/// Classification of one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterClassification {
    Absent,
    Present,
    Correct,
}

impl LetterClassification {
    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Parse a feedback string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use sedle::core::LetterClassification;
    ///
    /// let cells = LetterClassification::parse_pattern("GY-").unwrap();
    /// assert_eq!(cells, LetterClassification::parse_pattern("🟩🟨⬜").unwrap());
    /// assert!(LetterClassification::parse_pattern("GX").is_none());
    /// ```
    #[must_use]
    pub fn parse_pattern(s: &str) -> Option<Vec<Self>> {
        if s.is_empty() {
            return None;
        }
        s.chars().map(Self::from_symbol).collect()
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(label)
    }
}

/// One evaluated attempt: the guess and the classification of each position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    guess: Word,
    cells: Vec<LetterClassification>,
}

impl GuessRow {
    pub(crate) fn new(guess: Word, cells: Vec<LetterClassification>) -> Self {
        debug_assert_eq!(guess.len(), cells.len(), "one classification per letter");
        Self { guess, cells }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[LetterClassification] {
        &self.cells
    }

    /// Iterate `(letter, classification)` pairs in position order
    pub fn letters(&self) -> impl Iterator<Item = (u8, LetterClassification)> + '_ {
        self.guess.chars().iter().copied().zip(self.cells.iter().copied())
    }

    /// Every position is Correct, i.e. the guess equals the answer
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.cells
            .iter()
            .all(|&cell| cell == LetterClassification::Correct)
    }

    /// Convert the row to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.cells.iter().map(|cell| cell.to_emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::LetterClassification::{Absent, Correct, Present};

    fn row(guess: &str, pattern: &str) -> GuessRow {
        GuessRow::new(
            Word::new(guess).unwrap(),
            LetterClassification::parse_pattern(pattern).unwrap(),
        )
    }

    #[test]
    fn precedence_ordering() {
        assert!(Correct > Present);
        assert!(Present > Absent);
        assert_eq!(Absent.max(Correct), Correct);
        assert_eq!(Present.max(Absent), Present);
    }

    #[test]
    fn parse_pattern_valid() {
        let ascii = LetterClassification::parse_pattern("GYG--").unwrap();
        let emoji = LetterClassification::parse_pattern("🟩🟨🟩⬜⬜").unwrap();
        let lower = LetterClassification::parse_pattern("gyg__").unwrap();

        assert_eq!(ascii, vec![Correct, Present, Correct, Absent, Absent]);
        assert_eq!(ascii, emoji);
        assert_eq!(ascii, lower);
    }

    #[test]
    fn parse_pattern_invalid() {
        assert!(LetterClassification::parse_pattern("GXGGY").is_none());
        assert!(LetterClassification::parse_pattern("").is_none());
    }

    #[test]
    fn row_exact_match() {
        assert!(row("slave", "GGGGG").is_exact());
        assert!(!row("slave", "GGGGY").is_exact());
    }

    #[test]
    fn row_letters_pair_positions() {
        let r = row("frogs", "G-Y--");
        let pairs: Vec<_> = r.letters().collect();
        assert_eq!(pairs[0], (b'f', Correct));
        assert_eq!(pairs[2], (b'o', Present));
        assert_eq!(pairs.len(), 5);
    }

    #[test]
    fn row_to_emoji() {
        assert_eq!(row("bread", "GY-GY").to_emoji(), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn classification_display() {
        assert_eq!(Correct.to_string(), "correct");
        assert_eq!(Absent.to_string(), "absent");
    }
}
