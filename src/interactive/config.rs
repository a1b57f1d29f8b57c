//! TUI-specific configuration
use std::env;
use std::time::Duration;

/// Terminal UI timing configuration.
///
/// Kept separate from [`crate::game::GameConfig`]: none of these values
/// affect game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Delay between revealing consecutive cells of an evaluated row.
    pub reveal_interval: Duration,
    /// How long toasts stay up; passed to the game as its notice duration.
    pub toast_duration: Duration,
    /// Longest wait for input before redrawing timers.
    pub tick_rate: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            reveal_interval: Duration::from_millis(100),
            toast_duration: Duration::from_millis(1500),
            tick_rate: Duration::from_millis(50),
        }
    }
}

impl UiConfig {
    /// Construct UI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SEDLE_REVEAL_MS` - Delay between cell reveals (default: 100)
    /// - `SEDLE_TOAST_MS` - Toast display time (default: 1500)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_ms(&lookup, "SEDLE_REVEAL_MS") {
            config.reveal_interval = ms;
        }
        if let Some(ms) = read_ms(&lookup, "SEDLE_TOAST_MS") {
            config.toast_duration = ms;
        }

        config
    }
}

fn read_ms(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<Duration> {
    lookup(key)?.trim().parse().ok().map(Duration::from_millis)
}
