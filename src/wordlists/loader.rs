//! Answer list loading utilities
//!
//! Builds an [`AnswerSource`] from the embedded list or from a file.

use super::ANSWERS;
use crate::core::Word;
use crate::game::{AnswerSource, ConfigError};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a word list, one word per line
///
/// Blank lines are skipped; line order is kept. Unlike guess input, a bad
/// entry is an error rather than silently dropped, since it would shift
/// every later round.
///
/// # Errors
///
/// Returns `ConfigError::InvalidAnswer` naming the first bad line (1-based).
///
/// # Examples
/// ```
/// use sedle::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("slave\n\nEgypt\n").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "egypt");
/// ```
pub fn parse_word_list(content: &str) -> Result<Vec<Word>, ConfigError> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, text)| {
            Word::new(text).map_err(|source| ConfigError::InvalidAnswer {
                line,
                text: text.to_string(),
                source,
            })
        })
        .collect()
}

/// Load an answer source from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read, contains an invalid word,
/// or has no words at all.
///
/// # Examples
/// ```no_run
/// use sedle::wordlists::loader::load_from_file;
///
/// let source = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} answers", source.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<AnswerSource> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    let words = parse_word_list(&content)
        .with_context(|| format!("Invalid word list {}", path.display()))?;

    AnswerSource::new(words).with_context(|| format!("No answers in {}", path.display()))
}

/// Answer source over the embedded list
///
/// # Errors
///
/// Only fails if the embedded list itself is malformed.
pub fn builtin() -> Result<AnswerSource, ConfigError> {
    AnswerSource::from_slice(ANSWERS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;

    #[test]
    fn parse_keeps_order_and_lowercases() {
        let words = parse_word_list("Slave\negypt\nFIRST\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["slave", "egypt", "first"]);
    }

    #[test]
    fn parse_skips_blank_lines_and_trims() {
        let words = parse_word_list("\n  matza  \n\n\tbread\n").unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "matza");
    }

    #[test]
    fn parse_reports_bad_line() {
        let err = parse_word_list("slave\n\nm0tzi\n").unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidAnswer {
                line: 3,
                text: "m0tzi".to_string(),
                source: WordError::InvalidCharacters,
            }
        );
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse_word_list("").unwrap().is_empty());
    }

    #[test]
    fn load_missing_file_fails() {
        let err = load_from_file("does/not/exist.txt").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }

    #[test]
    fn load_from_temp_file() {
        let path = std::env::temp_dir().join(format!("sedle-loader-{}.txt", std::process::id()));
        fs::write(&path, "herbs\nfeast\n").unwrap();

        let source = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(source.len(), 2);
        assert_eq!(source.current().text(), "herbs");
    }

    #[test]
    fn load_blank_file_is_empty_list_error() {
        let path = std::env::temp_dir().join(format!("sedle-blank-{}.txt", std::process::id()));
        fs::write(&path, "\n\n").unwrap();

        let err = load_from_file(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::EmptyAnswerList)
        );
    }

    #[test]
    fn builtin_starts_with_slave() {
        let source = builtin().unwrap();
        assert_eq!(source.len(), ANSWERS.len());
        assert_eq!(source.current().text(), "slave");
    }
}
