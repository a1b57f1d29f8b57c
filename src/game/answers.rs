//! Cyclic source of hidden answers

use super::config::ConfigError;
use crate::core::Word;

/// Ordered, non-empty list of answers with a wrapping cursor
///
/// Rounds walk the list in order and start over after the last entry.
#[derive(Debug, Clone)]
pub struct AnswerSource {
    answers: Vec<Word>,
    cursor: usize,
}

impl AnswerSource {
    /// Create a source positioned on the first answer
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyAnswerList` if `answers` is empty.
    pub fn new(answers: Vec<Word>) -> Result<Self, ConfigError> {
        if answers.is_empty() {
            return Err(ConfigError::EmptyAnswerList);
        }
        Ok(Self { answers, cursor: 0 })
    }

    /// Build a source from raw strings
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidAnswer` (with a 1-based index) for the
    /// first entry that is not a valid word, or `EmptyAnswerList`.
    ///
    /// # Examples
    /// ```
    /// use sedle::game::AnswerSource;
    ///
    /// let mut source = AnswerSource::from_slice(&["slave", "egypt"]).unwrap();
    /// assert_eq!(source.current().text(), "slave");
    /// assert_eq!(source.advance().text(), "egypt");
    /// assert_eq!(source.advance().text(), "slave");
    /// ```
    pub fn from_slice(slice: &[&str]) -> Result<Self, ConfigError> {
        let answers = slice
            .iter()
            .enumerate()
            .map(|(i, &text)| {
                Word::new(text).map_err(|source| ConfigError::InvalidAnswer {
                    line: i + 1,
                    text: text.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(answers)
    }

    /// The answer for the current round
    #[must_use]
    pub fn current(&self) -> &Word {
        &self.answers[self.cursor]
    }

    /// Move to the next answer, wrapping after the last one
    pub fn advance(&mut self) -> &Word {
        self.cursor = (self.cursor + 1) % self.answers.len();
        self.current()
    }

    /// Index of the current answer
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Always false; an empty source cannot be constructed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.answers
    }
}
