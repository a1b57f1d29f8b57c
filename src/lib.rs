//! Sedle
//!
//! A word-guessing game: guess the hidden word within a fixed number of
//! attempts, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use sedle::core::{GuessEvaluator, KeyboardState, LetterClassification, Word};
//!
//! let guess = Word::new("death").unwrap();
//! let answer = Word::new("bread").unwrap();
//!
//! let mut keyboard = KeyboardState::new();
//! let row = GuessEvaluator::evaluate(guess, &answer, &mut keyboard);
//! assert_eq!(row.to_emoji(), "🟨🟨🟨⬜⬜");
//! assert_eq!(keyboard.get(b'h'), Some(LetterClassification::Absent));
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Answer lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
