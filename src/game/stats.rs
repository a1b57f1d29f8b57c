//! In-memory session statistics

use super::round::RoundStatus;

/// Results of finished rounds in this session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub rounds_played: usize,
    pub rounds_won: usize,
    /// `win_distribution[n - 1]` counts wins on the n-th attempt
    pub win_distribution: Vec<usize>,
}

impl SessionStats {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            rounds_played: 0,
            rounds_won: 0,
            win_distribution: vec![0; max_attempts],
        }
    }

    /// Record a finished round that used `attempts` rows
    pub fn record(&mut self, status: RoundStatus, attempts: usize) {
        match status {
            RoundStatus::InProgress => return,
            RoundStatus::Won => {
                self.rounds_won += 1;
                if let Some(slot) = attempts
                    .checked_sub(1)
                    .and_then(|i| self.win_distribution.get_mut(i))
                {
                    *slot += 1;
                }
            }
            RoundStatus::Lost => {}
        }
        self.rounds_played += 1;
    }

    /// Percentage of rounds won, 0 when nothing was played
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Round counts stay far below 2^52
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}
