//! Simple console mode
//!
//! Line-based game without the TUI. Each line is typed into the current row
//! and submitted; the controller decides what is accepted.

use crate::core::{GuessRow, KeyboardState, Word};
use crate::game::{
    AnswerSource, DisplaySink, GameConfig, GameController, NotificationSink, RoundState,
    RoundStatus, SessionStats, Signal, Transition,
};
use crate::output::{
    print_help, print_keyboard, print_round_over, print_row, print_stats, print_welcome,
};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Prints rows and keyboard as the controller reports them
struct ConsoleDisplay {
    max_attempts: usize,
    rows: Vec<GuessRow>,
}

impl DisplaySink for ConsoleDisplay {
    fn round_started(&mut self, round: &RoundState) {
        self.rows.clear();
        println!(
            "🔄 New round: {} letters, {} tries\n",
            round.word_length(),
            round.max_attempts()
        );
    }

    fn guess_evaluated(&mut self, attempt: usize, row: &GuessRow, keyboard: &KeyboardState) {
        self.rows.push(row.clone());
        print_row(attempt, self.max_attempts, row);
        print_keyboard(keyboard);
    }

    fn round_over(&mut self, status: RoundStatus, answer: &Word) {
        print_round_over(status, answer, &self.rows);
    }
}

/// Console messages stay in scrollback, so the duration is unused
struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify(&mut self, message: &str, _duration: Duration) {
        println!("{}\n", format!("❌ {message}").red());
    }
}

/// Run the simple console mode until the player quits or input ends
///
/// # Errors
///
/// Returns an error if the game cannot be constructed from `config` and
/// `answers`, or on an I/O error reading stdin.
pub fn run_simple(config: GameConfig, answers: AnswerSource) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(config, answers, &mut stdin.lock())?;
    Ok(())
}

fn run_simple_with(
    config: GameConfig,
    answers: AnswerSource,
    input: &mut impl BufRead,
) -> Result<SessionStats> {
    print_welcome(config.word_length, config.max_attempts);

    let display = ConsoleDisplay {
        max_attempts: config.max_attempts,
        rows: Vec::new(),
    };
    let mut game = GameController::new(config, answers, display, ConsoleNotifier, false)?;

    loop {
        let prompt = format!(
            "Guess {}/{}",
            game.round().attempt_index() + 1,
            game.round().max_attempts()
        );
        let Some(line) = get_user_input(&prompt, input)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" | "?" => {
                let config = game.config();
                print_help(config.word_length, config.max_attempts);
                continue;
            }
            _ => {}
        }

        let transition = submit_line(&mut game, &line);
        if let Transition::Evaluated(status) = transition
            && status.is_over()
        {
            print_stats(game.stats());

            let answer = get_user_input("Next Sedler? (yes/no)", input)?.unwrap_or_default();
            if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                game.handle(Signal::NextRound);
            } else {
                break;
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(game.stats().clone())
}

/// Shown when a console line holds more letters than fit in a row
const TOO_MANY_LETTERS_MESSAGE: &str = "Too many letters";

/// Replace the current row with the letters of `line` and submit it
///
/// Lines with more letters than the word length are rejected rather than
/// cut short, since the extra letters would be dropped silently.
fn submit_line<D, N>(game: &mut GameController<D, N, bool>, line: &str) -> Transition
where
    D: DisplaySink,
    N: NotificationSink,
{
    let letters = line.chars().filter(char::is_ascii_alphabetic).count();
    if letters > game.config().word_length {
        let duration = game.config().notice_duration;
        game.notifier_mut().notify(TOO_MANY_LETTERS_MESSAGE, duration);
        return Transition::Ignored;
    }

    while game.round().cell_cursor() > 0 {
        if game.handle(Signal::Backspace) == Transition::Ignored {
            break;
        }
    }
    for ch in line.chars() {
        game.handle(Signal::Letter(ch));
    }
    game.handle(Signal::Submit)
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str, input: &mut impl BufRead) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
