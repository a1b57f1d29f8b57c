//! Display functions for console mode and command results

use super::formatters::{colored_keyboard, colored_row, create_progress_bar, share_grid};
use crate::core::{GuessRow, KeyboardState, Word};
use crate::game::{RoundStatus, SessionStats};
use colored::Colorize;

/// Print the banner shown when console mode starts
pub fn print_welcome(word_length: usize, max_attempts: usize) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                         S E D L E                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help(word_length, max_attempts);
}

pub fn print_help(word_length: usize, max_attempts: usize) {
    println!("Guess the {word_length}-letter word in {max_attempts} tries.");
    println!("  {} right letter, right spot", " G ".black().on_green().bold());
    println!("  {} in the word, wrong spot", " Y ".black().on_yellow().bold());
    println!("  {} not in the word", " X ".white().on_bright_black());
    println!("\nCommands: 'help' for this text, 'quit' to exit\n");
}

/// Print one evaluated row with its attempt number
pub fn print_row(attempt: usize, max_attempts: usize, row: &GuessRow) {
    println!(
        "  {} {}",
        format!("{}/{max_attempts}", attempt + 1).bright_black(),
        colored_row(row)
    );
}

pub fn print_keyboard(keyboard: &KeyboardState) {
    println!();
    for line in colored_keyboard(keyboard).lines() {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-round panel
pub fn print_round_over(status: RoundStatus, answer: &Word, rows: &[GuessRow]) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    println!("{}", "  Sedle!".bright_green().bold());
    match status {
        RoundStatus::Won => println!(
            "  Solved in {} {}",
            rows.len().to_string().bright_cyan().bold(),
            if rows.len() == 1 { "guess" } else { "guesses" }
        ),
        RoundStatus::Lost => println!("  {}", "Out of guesses".red().bold()),
        RoundStatus::InProgress => {}
    }
    println!(
        "  The word was: {}",
        answer.text().to_uppercase().bright_yellow().bold()
    );
    println!();
    for line in share_grid(rows).lines() {
        println!("  {line}");
    }
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print session statistics
pub fn print_stats(stats: &SessionStats) {
    println!(
        "\n📈 {}  played {}  won {}  ({:.0}%)",
        "Session:".bright_cyan().bold(),
        stats.rounds_played,
        stats.rounds_won,
        stats.win_rate()
    );

    let most = stats.win_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.win_distribution.iter().enumerate() {
        println!(
            "   {}: {} {count}",
            i + 1,
            create_progress_bar(count, most, 20).green()
        );
    }
    println!();
}

/// Print the classification of a single guess
pub fn print_check_result(row: &GuessRow, answer: &Word) {
    println!(
        "\n{} vs {}",
        row.guess().text().to_uppercase().bright_white().bold(),
        answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("  {}", colored_row(row));
    println!("  {}", row.to_emoji());
    for (letter, classification) in row.letters() {
        println!("   {} {classification}", char::from(letter).to_ascii_uppercase());
    }
    println!();
}
