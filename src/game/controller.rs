//! Round orchestration
//!
//! The controller owns the answer source, the round and the keyboard state,
//! and turns input signals into transitions reported to its sinks.

use super::answers::AnswerSource;
use super::config::{ConfigError, GameConfig, INCOMPLETE_GUESS_MESSAGE};
use super::round::{RoundState, RoundStatus};
use super::signal::Signal;
use super::sinks::{DisplaySink, NotificationSink, OverlayGate};
use super::stats::SessionStats;
use crate::core::{GuessEvaluator, KeyboardState, Word};
use tracing::{debug, info};

/// What a signal did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Dropped: overlay shown, round over, or input not acceptable
    Ignored,
    /// The current row's buffer changed
    InputChanged,
    /// Submit with a partial row; a notification was sent
    Incomplete,
    /// A guess was evaluated; carries the resulting status
    Evaluated(RoundStatus),
    /// A new round started with the next answer
    NewRound,
}

/// Single game instance driven by [`Signal`]s
///
/// # Examples
/// ```
/// use sedle::game::{AnswerSource, GameConfig, GameController, RoundStatus, Signal, Transition};
///
/// let answers = AnswerSource::from_slice(&["slave", "egypt"]).unwrap();
/// let mut game = GameController::new(GameConfig::default(), answers, (), (), false).unwrap();
///
/// for ch in "SLAVE".chars() {
///     game.handle(Signal::Letter(ch));
/// }
/// assert_eq!(game.handle(Signal::Submit), Transition::Evaluated(RoundStatus::Won));
/// assert_eq!(game.round().attempt_index(), 1);
/// ```
pub struct GameController<D, N, G> {
    config: GameConfig,
    answers: AnswerSource,
    round: RoundState,
    keyboard: KeyboardState,
    stats: SessionStats,
    display: D,
    notifier: N,
    overlay: G,
}

impl<D, N, G> GameController<D, N, G>
where
    D: DisplaySink,
    N: NotificationSink,
    G: OverlayGate,
{
    /// Create a controller and start the first round
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid or any answer
    /// does not have the configured word length.
    pub fn new(
        config: GameConfig,
        answers: AnswerSource,
        display: D,
        notifier: N,
        overlay: G,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        if let Some(word) = answers
            .words()
            .iter()
            .find(|word| word.len() != config.word_length)
        {
            return Err(ConfigError::AnswerLength {
                answer: word.text().to_string(),
                expected: config.word_length,
                got: word.len(),
            });
        }

        let mut controller = Self {
            round: RoundState::new(&config),
            keyboard: KeyboardState::new(),
            stats: SessionStats::new(config.max_attempts),
            config,
            answers,
            display,
            notifier,
            overlay,
        };
        controller.start_round();
        Ok(controller)
    }

    /// Apply one input signal
    pub fn handle(&mut self, signal: Signal) -> Transition {
        if self.overlay.is_blocking() {
            debug!(?signal, "input ignored while overlay is shown");
            return Transition::Ignored;
        }

        if signal == Signal::NextRound {
            return self.next_round();
        }

        if self.round.status().is_over() {
            debug!(?signal, "input ignored after round over");
            return Transition::Ignored;
        }

        match signal {
            Signal::Letter(ch) => self.changed_if(|round| round.type_letter(ch)),
            Signal::Backspace => self.changed_if(RoundState::backspace),
            Signal::Submit => self.submit(),
            Signal::NextRound => Transition::Ignored,
        }
    }

    /// Start the next round; only honoured once the current one is over
    fn next_round(&mut self) -> Transition {
        if !self.round.status().is_over() {
            debug!("next round requested while round in progress");
            return Transition::Ignored;
        }

        self.answers.advance();
        self.round = RoundState::new(&self.config);
        self.keyboard.clear();
        self.start_round();
        Transition::NewRound
    }

    fn start_round(&mut self) {
        info!(
            answer_index = self.answers.position(),
            word_length = self.config.word_length,
            max_attempts = self.config.max_attempts,
            "starting round"
        );
        self.display.round_started(&self.round);
    }

    fn changed_if(&mut self, apply: impl FnOnce(&mut RoundState) -> bool) -> Transition {
        if apply(&mut self.round) {
            debug!(buffer = self.round.buffer(), "input changed");
            self.display.input_changed(&self.round);
            Transition::InputChanged
        } else {
            Transition::Ignored
        }
    }

    fn submit(&mut self) -> Transition {
        let Some(guess) = self.round.pending_guess() else {
            debug!(cell_cursor = self.round.cell_cursor(), "incomplete guess");
            self.notifier
                .notify(INCOMPLETE_GUESS_MESSAGE, self.config.notice_duration);
            return Transition::Incomplete;
        };

        let attempt = self.round.attempt_index();
        let row = GuessEvaluator::evaluate(guess, self.answers.current(), &mut self.keyboard);
        debug!(attempt, guess = row.guess().text(), feedback = %row.to_emoji(), "guess evaluated");
        self.display.guess_evaluated(attempt, &row, &self.keyboard);

        let status = self.round.commit(row);
        if status.is_over() {
            let attempts = self.round.attempt_index();
            self.stats.record(status, attempts);
            info!(?status, attempts, answer = self.answers.current().text(), "round over");
            self.display.round_over(status, self.answers.current());
        } else {
            self.display.input_changed(&self.round);
        }

        Transition::Evaluated(status)
    }
}

impl<D, N, G> GameController<D, N, G> {
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// The answer, once the round is over
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        self.round
            .status()
            .is_over()
            .then(|| self.answers.current())
    }

    #[must_use]
    pub const fn display(&self) -> &D {
        &self.display
    }

    pub const fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    pub const fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    #[must_use]
    pub const fn overlay(&self) -> &G {
        &self.overlay
    }

    pub const fn overlay_mut(&mut self) -> &mut G {
        &mut self.overlay
    }
}
