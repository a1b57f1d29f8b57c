//! Round state machine
//!
//! [`GameController`] consumes [`Signal`]s, keeps the [`RoundState`] and
//! keyboard state current, and reports to injected display, notification and
//! overlay collaborators.

mod answers;
mod config;
mod controller;
mod round;
mod signal;
mod sinks;
mod stats;

pub use answers::AnswerSource;
pub use config::{
    ConfigError, DEFAULT_MAX_ATTEMPTS, DEFAULT_NOTICE_DURATION, DEFAULT_WORD_LENGTH, GameConfig,
    INCOMPLETE_GUESS_MESSAGE,
};
pub use controller::{GameController, Transition};
pub use round::{RoundState, RoundStatus};
pub use signal::Signal;
pub use sinks::{DisplaySink, NotificationSink, OverlayGate};
pub use stats::SessionStats;
