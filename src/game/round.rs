//! State of a single round: input buffer, attempts and status

use super::config::GameConfig;
use crate::core::{GuessRow, Word};

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    /// Won and Lost both end the round
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Input buffer, submitted rows and status of the current round
///
/// `buffer.len()` is the cell cursor; it never exceeds the word length.
/// `attempt_index` counts submitted rows and stays below `max_attempts`
/// while the round is in progress.
#[derive(Debug, Clone)]
pub struct RoundState {
    word_length: usize,
    max_attempts: usize,
    attempt_index: usize,
    buffer: String,
    status: RoundStatus,
    rows: Vec<GuessRow>,
}

impl RoundState {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            word_length: config.word_length,
            max_attempts: config.max_attempts,
            attempt_index: 0,
            buffer: String::with_capacity(config.word_length),
            status: RoundStatus::InProgress,
            rows: Vec::with_capacity(config.max_attempts),
        }
    }

    /// Append a letter to the buffer
    ///
    /// Accepted only for a single ASCII letter while the round is in progress
    /// and the row is not full. Returns whether the buffer changed.
    pub fn type_letter(&mut self, ch: char) -> bool {
        if self.status.is_over() || !ch.is_ascii_alphabetic() || self.is_full() {
            return false;
        }
        self.buffer.push(ch.to_ascii_lowercase());
        true
    }

    /// Remove the last letter of the buffer. Returns whether it changed.
    pub fn backspace(&mut self) -> bool {
        if self.status.is_over() {
            return false;
        }
        self.buffer.pop().is_some()
    }

    /// The buffered guess, if the row is full and the round still running
    #[must_use]
    pub fn pending_guess(&self) -> Option<Word> {
        if self.status.is_over() || !self.is_full() {
            return None;
        }
        Word::with_length(self.buffer.as_str(), self.word_length).ok()
    }

    /// Record an evaluated row and move on to the next attempt
    ///
    /// Termination is checked in order: an exact row wins; otherwise using
    /// the last row loses; otherwise the round continues.
    pub fn commit(&mut self, row: GuessRow) -> RoundStatus {
        debug_assert!(!self.status.is_over(), "commit after round over");

        let exact = row.is_exact();
        self.rows.push(row);
        self.attempt_index += 1;
        self.buffer.clear();

        self.status = if exact {
            RoundStatus::Won
        } else if self.attempt_index >= self.max_attempts {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        };
        self.status
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub const fn attempt_index(&self) -> usize {
        self.attempt_index
    }

    /// Number of letters typed into the current row
    #[must_use]
    pub fn cell_cursor(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    fn is_full(&self) -> bool {
        self.buffer.len() >= self.word_length
    }
}
