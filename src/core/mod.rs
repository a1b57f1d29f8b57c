//! Core domain types for Sedle
//!
//! Words, per-letter feedback, keyboard aggregation and the evaluator.
//! Everything here is pure and synchronous.

mod evaluator;
mod feedback;
mod keyboard;
mod word;

pub use evaluator::GuessEvaluator;
pub use feedback::{GuessRow, LetterClassification};
pub use keyboard::KeyboardState;
pub use word::{Word, WordError};
