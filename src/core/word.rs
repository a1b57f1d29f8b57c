//! Sedle word representation
//!
//! A Word stores a lowercase ASCII word along with the set of its letters,
//! so membership checks during evaluation are a single set lookup.

use rustc_hash::FxHashSet;
use std::fmt;

/// A lowercase word with letter position tracking
///
/// Words of any non-zero length can be built; the game checks that every
/// answer and guess has the configured length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: FxHashSet<u8>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidLength { expected: usize, got: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidLength { expected, got } => {
                write!(f, "Word must be exactly {expected} letters, got {got}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use sedle::core::Word;
    ///
    /// let word = Word::new("Slave").unwrap();
    /// assert_eq!(word.text(), "slave");
    ///
    /// assert!(Word::new("sl4ve").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = text.bytes().collect();

        Ok(Self {
            text,
            letters,
        })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error
    /// [`Word::new`] reports.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(WordError::InvalidLength {
                expected: length,
                got: word.len(),
            })
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; empty words cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("bread").unwrap();
        assert_eq!(word.text(), "bread");
        assert_eq!(word.chars(), b"bread");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("SLAVE").unwrap();
        assert_eq!(word.text(), "slave");

        let word2 = Word::new("SlAvE").unwrap();
        assert_eq!(word2.text(), "slave");
    }

    #[test]
    fn word_creation_rejects_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("mat2a"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ma za"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("matz!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("matzä"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_with_length() {
        assert!(Word::with_length("egypt", 5).is_ok());
        assert_eq!(
            Word::with_length("egypt", 6),
            Err(WordError::InvalidLength {
                expected: 6,
                got: 5
            })
        );
        assert_eq!(Word::with_length("", 5), Err(WordError::Empty));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("frogs").unwrap();
        assert!(word.has_letter(b'f'));
        assert!(word.has_letter(b's'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_has_letter_with_duplicates() {
        let word = Word::new("maror").unwrap();
        assert!(word.has_letter(b'r'));
        assert!(word.has_letter(b'o'));
        assert!(!word.has_letter(b'e'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("Orech").unwrap();
        assert_eq!(format!("{word}"), "orech");
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("feast").unwrap(), Word::new("FEAST").unwrap());
        assert_ne!(Word::new("feast").unwrap(), Word::new("beast").unwrap());
    }

    #[test]
    fn word_error_messages() {
        let err = WordError::InvalidLength {
            expected: 5,
            got: 3,
        };
        assert_eq!(err.to_string(), "Word must be exactly 5 letters, got 3");
    }
}
