//! Formatting utilities for terminal output

use crate::core::{GuessRow, KeyboardState, LetterClassification};
use colored::{ColoredString, Colorize};

/// Format the rows of a round as emoji lines, one row per line
#[must_use]
pub fn share_grid(rows: &[GuessRow]) -> String {
    rows.iter()
        .map(GuessRow::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Color one letter tile by its classification
#[must_use]
pub fn tile(letter: char, classification: Option<LetterClassification>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match classification {
        Some(LetterClassification::Correct) => text.black().on_green().bold(),
        Some(LetterClassification::Present) => text.black().on_yellow().bold(),
        Some(LetterClassification::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Render an evaluated row as colored tiles
#[must_use]
pub fn colored_row(row: &GuessRow) -> String {
    row.letters()
        .map(|(letter, classification)| tile(char::from(letter), Some(classification)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the keyboard, one QWERTY row per line
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardState) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys = row
                .bytes()
                .map(|letter| tile(char::from(letter), keyboard.get(letter)).to_string())
                .collect::<Vec<_>>()
                .join("");
            format!("{}{keys}", " ".repeat(i))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Letter rows of a QWERTY keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
