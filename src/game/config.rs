//! Game configuration fixed at construction

use crate::core::WordError;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(1500);

/// Notification shown when a guess is submitted before the row is full
pub const INCOMPLETE_GUESS_MESSAGE: &str = "Not enough letters";

/// Board dimensions and notification timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per guess (L)
    pub word_length: usize,
    /// Rows on the board
    pub max_attempts: usize,
    /// How long the "incomplete guess" notification should stay up
    pub notice_duration: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_attempts: usize) -> Self {
        Self {
            word_length,
            max_attempts,
            notice_duration: DEFAULT_NOTICE_DURATION,
        }
    }

    #[must_use]
    pub const fn with_notice_duration(mut self, duration: Duration) -> Self {
        self.notice_duration = duration;
        self
    }

    /// Check the board dimensions
    ///
    /// # Errors
    /// Returns `ConfigError` if the word length or attempt count is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}

/// Error type for configurations a game cannot start from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWordLength,
    ZeroAttempts,
    EmptyAnswerList,
    AnswerLength {
        answer: String,
        expected: usize,
        got: usize,
    },
    InvalidAnswer {
        line: usize,
        text: String,
        source: WordError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordLength => write!(f, "Word length must be at least 1"),
            Self::ZeroAttempts => write!(f, "At least one attempt is required"),
            Self::EmptyAnswerList => write!(f, "Answer list is empty"),
            Self::AnswerLength {
                answer,
                expected,
                got,
            } => write!(
                f,
                "Answer '{answer}' has {got} letters, expected {expected}"
            ),
            Self::InvalidAnswer { line, text, source } => {
                write!(f, "Invalid answer '{text}' on line {line}: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidAnswer { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_by_six() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.notice_duration, Duration::from_millis(1500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert_eq!(GameConfig::new(0, 6).validate(), Err(ConfigError::ZeroWordLength));
        assert_eq!(GameConfig::new(5, 0).validate(), Err(ConfigError::ZeroAttempts));
    }

    #[test]
    fn notice_duration_override() {
        let config = GameConfig::default().with_notice_duration(Duration::from_millis(500));
        assert_eq!(config.notice_duration, Duration::from_millis(500));
    }

    #[test]
    fn invalid_answer_reports_line_and_source() {
        use std::error::Error;

        let err = ConfigError::InvalidAnswer {
            line: 3,
            text: "m4tza".to_string(),
            source: WordError::InvalidCharacters,
        };
        assert_eq!(
            err.to_string(),
            "Invalid answer 'm4tza' on line 3: Word contains invalid characters"
        );
        assert!(err.source().is_some());
    }
}
