//! Answer lists for Sedle
//!
//! The built-in list is embedded in the binary; custom lists are read from
//! files with one word per line.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
