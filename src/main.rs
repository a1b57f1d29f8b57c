//! Sedle - CLI
//!
//! Word-guessing game with TUI and console modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sedle::{
    commands::{check_guess, run_simple},
    game::{AnswerSource, DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig},
    output::print_check_result,
    wordlists::loader::{builtin, load_from_file},
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "sedle",
    about = "Guess the hidden word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Guesses allowed per round
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    attempts: usize,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (line-based, no TUI)
    Simple,

    /// Classify a single guess against an answer
    Check {
        /// The guessed word
        guess: String,

        /// The hidden word
        answer: String,
    },
}

/// Load answers based on the -w flag
fn load_answers(wordlist: &str) -> Result<AnswerSource> {
    match wordlist {
        "builtin" => Ok(builtin()?),
        path => load_from_file(path),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let config = GameConfig::new(cli.length, cli.attempts);

    match command {
        Commands::Play => {
            let _guard = setup_file_logging()?;
            run_play_command(config, &cli.wordlist)
        }
        Commands::Simple => {
            setup_stderr_logging();
            let answers = load_answers(&cli.wordlist)?;
            run_simple(config, answers)
        }
        Commands::Check { guess, answer } => {
            setup_stderr_logging();
            let result = check_guess(&guess, &answer).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result.row, &result.answer);
            Ok(())
        }
    }
}

fn run_play_command(config: GameConfig, wordlist: &str) -> Result<()> {
    use sedle::interactive::{App, UiConfig, run_tui};

    let answers = load_answers(wordlist)?;
    let ui = UiConfig::from_env();
    info!(?ui, "starting terminal UI");

    let app = App::new(config, answers, ui)?;
    run_tui(app)
}

/// Console modes share the terminal with log output, so only warnings show
fn setup_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// The TUI owns the screen; logs go to `sedle.log` in the log directory
fn setup_file_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "sedle.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    info!("Log file: {}/sedle.log", log_dir.display());
    Ok(guard)
}

fn log_directory() -> PathBuf {
    std::env::var_os("SEDLE_LOG_DIR")
        .map_or_else(|| std::env::temp_dir().join("sedle"), PathBuf::from)
}
