//! Screen-side projection of the game
//!
//! `BoardView` mirrors what the controller reports and adds reveal timing.
//! `HelpOverlay` is the blocking overlay the controller consults.

use super::pacing::{Reveal, ToastSlot};
use crate::core::{GuessRow, KeyboardState, LetterClassification, Word};
use crate::game::{DisplaySink, NotificationSink, OverlayGate, RoundState, RoundStatus};
use std::time::{Duration, Instant};
use tracing::info;

/// One board cell as it should be drawn at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub letter: Option<char>,
    pub classification: Option<LetterClassification>,
}

impl CellView {
    const EMPTY: Self = Self {
        letter: None,
        classification: None,
    };
}

#[derive(Debug, Clone)]
struct EvaluatedRow {
    row: GuessRow,
    reveal: Reveal,
}

/// Board, keyboard and end-of-round state for the TUI
#[derive(Debug, Clone)]
pub struct BoardView {
    word_length: usize,
    max_attempts: usize,
    reveal_interval: Duration,
    rows: Vec<EvaluatedRow>,
    buffer: String,
    keyboard: KeyboardState,
    pending_keyboard: Option<KeyboardState>,
    outcome: Option<(RoundStatus, Word)>,
}

impl BoardView {
    #[must_use]
    pub fn new(reveal_interval: Duration) -> Self {
        Self {
            word_length: 0,
            max_attempts: 0,
            reveal_interval,
            rows: Vec::new(),
            buffer: String::new(),
            keyboard: KeyboardState::new(),
            pending_keyboard: None,
            outcome: None,
        }
    }

    pub fn start_round(&mut self, round: &RoundState) {
        self.word_length = round.word_length();
        self.max_attempts = round.max_attempts();
        self.rows.clear();
        self.buffer.clear();
        self.keyboard.clear();
        self.pending_keyboard = None;
        self.outcome = None;
    }

    pub fn record_guess(&mut self, row: &GuessRow, keyboard: &KeyboardState, now: Instant) {
        self.rows.push(EvaluatedRow {
            row: row.clone(),
            reveal: Reveal::new(now, self.reveal_interval, row.cells().len()),
        });
        self.buffer.clear();
        self.pending_keyboard = Some(keyboard.clone());
    }

    /// Apply keyboard styling once the latest reveal has finished
    pub fn tick(&mut self, now: Instant) {
        if self.pending_keyboard.is_some() && !self.is_animating(now) {
            self.keyboard = self.pending_keyboard.take().unwrap_or_default();
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.rows
            .last()
            .is_some_and(|last| !last.reveal.is_finished(now))
    }

    /// What to draw at `(attempt, position)`
    #[must_use]
    pub fn cell(&self, attempt: usize, position: usize, now: Instant) -> CellView {
        if let Some(evaluated) = self.rows.get(attempt) {
            let letter = evaluated
                .row
                .guess()
                .chars()
                .get(position)
                .map(|&b| char::from(b));
            let classification = (position < evaluated.reveal.revealed(now))
                .then(|| evaluated.row.cells().get(position).copied())
                .flatten();
            return CellView {
                letter,
                classification,
            };
        }

        if attempt == self.rows.len() {
            return CellView {
                letter: self.buffer.chars().nth(position),
                classification: None,
            };
        }

        CellView::EMPTY
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Outcome and answer, shown once the final row has been revealed
    #[must_use]
    pub fn outcome(&self, now: Instant) -> Option<(RoundStatus, &Word)> {
        if self.is_animating(now) {
            return None;
        }
        self.outcome
            .as_ref()
            .map(|(status, answer)| (*status, answer))
    }

    /// Share grid of the evaluated rows
    #[must_use]
    pub fn rows(&self) -> Vec<GuessRow> {
        self.rows.iter().map(|r| r.row.clone()).collect()
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl DisplaySink for BoardView {
    fn round_started(&mut self, round: &RoundState) {
        self.start_round(round);
    }

    fn input_changed(&mut self, round: &RoundState) {
        self.buffer.clear();
        self.buffer.push_str(round.buffer());
    }

    fn guess_evaluated(&mut self, _attempt: usize, row: &GuessRow, keyboard: &KeyboardState) {
        self.record_guess(row, keyboard, Instant::now());
    }

    fn round_over(&mut self, status: RoundStatus, answer: &Word) {
        self.outcome = Some((status, answer.clone()));
    }
}

impl NotificationSink for ToastSlot {
    fn notify(&mut self, message: &str, duration: Duration) {
        self.show(message, duration, Instant::now());
    }
}

/// Help screen; while open, game input is ignored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpOverlay {
    open: bool,
}

impl HelpOverlay {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        info!("opening help overlay");
        self.open = true;
    }

    pub fn close(&mut self) {
        info!("closing help overlay");
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }
}

impl OverlayGate for HelpOverlay {
    fn is_blocking(&self) -> bool {
        self.open
    }
}
