//! Collaborators the controller reports to
//!
//! Sinks are projections of controller state. They are told about changes
//! and never asked for game state.

use super::round::{RoundState, RoundStatus};
use crate::core::{GuessRow, KeyboardState, Word};
use std::time::Duration;

/// Receives board and keyboard updates
///
/// All methods default to doing nothing.
pub trait DisplaySink {
    /// A fresh round began; all cells and keys are blank
    fn round_started(&mut self, _round: &RoundState) {}

    /// The buffer of the current row changed
    fn input_changed(&mut self, _round: &RoundState) {}

    /// Row `attempt` (0-based) was evaluated
    fn guess_evaluated(&mut self, _attempt: usize, _row: &GuessRow, _keyboard: &KeyboardState) {}

    /// The round ended and the answer can be revealed
    fn round_over(&mut self, _status: RoundStatus, _answer: &Word) {}
}

/// Receives transient messages; the sink owns display and dismissal timing
pub trait NotificationSink {
    fn notify(&mut self, message: &str, duration: Duration);
}

/// Answers whether a blocking overlay (help screen) is currently shown
pub trait OverlayGate {
    fn is_blocking(&self) -> bool;
}

impl DisplaySink for () {}

impl NotificationSink for () {
    fn notify(&mut self, _message: &str, _duration: Duration) {}
}

/// A plain flag works as a gate: `false` never blocks
impl OverlayGate for bool {
    fn is_blocking(&self) -> bool {
        *self
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn round_started(&mut self, round: &RoundState) {
        (**self).round_started(round);
    }

    fn input_changed(&mut self, round: &RoundState) {
        (**self).input_changed(round);
    }

    fn guess_evaluated(&mut self, attempt: usize, row: &GuessRow, keyboard: &KeyboardState) {
        (**self).guess_evaluated(attempt, row, keyboard);
    }

    fn round_over(&mut self, status: RoundStatus, answer: &Word) {
        (**self).round_over(status, answer);
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for &mut T {
    fn notify(&mut self, message: &str, duration: Duration) {
        (**self).notify(message, duration);
    }
}
