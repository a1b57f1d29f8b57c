//! Presentation timers
//!
//! Deadlines for the staggered cell reveal and toast dismissal. They are
//! evaluated against an `Instant` passed in by the event loop, so nothing here
//! sleeps and game state is never touched.

use std::time::{Duration, Instant};

/// Staggered reveal of one evaluated row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    started: Instant,
    interval: Duration,
    cells: usize,
}

impl Reveal {
    #[must_use]
    pub const fn new(started: Instant, interval: Duration, cells: usize) -> Self {
        Self {
            started,
            interval,
            cells,
        }
    }

    /// Number of cells shown at `now`; one more appears every interval
    #[must_use]
    pub fn revealed(&self, now: Instant) -> usize {
        if self.interval.is_zero() {
            return self.cells;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let steps = elapsed.as_nanos() / self.interval.as_nanos();
        usize::try_from(steps).map_or(self.cells, |steps| steps.min(self.cells))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.revealed(now) >= self.cells
    }

    /// When the last cell appears
    #[must_use]
    pub fn finishes_at(&self) -> Instant {
        let cells = u32::try_from(self.cells).unwrap_or(u32::MAX);
        self.started + self.interval.saturating_mul(cells)
    }
}

/// A transient message with its dismissal deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

/// Single toast slot; showing a new toast cancels the previous dismissal
#[derive(Debug, Clone, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn show(&mut self, message: &str, duration: Duration, now: Instant) {
        self.current = Some(Toast {
            message: message.to_string(),
            expires_at: now + duration,
        });
    }

    /// Message on screen at `now`, if any
    #[must_use]
    pub fn visible(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|toast| now < toast.expires_at)
            .map(|toast| toast.message.as_str())
    }

    /// Drop an expired toast; returns whether one was dropped
    pub fn expire(&mut self, now: Instant) -> bool {
        if self
            .current
            .as_ref()
            .is_some_and(|toast| now >= toast.expires_at)
        {
            self.current = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn reveal_one_cell_per_interval() {
        let start = Instant::now();
        let reveal = Reveal::new(start, MS * 100, 5);

        assert_eq!(reveal.revealed(start), 0);
        assert_eq!(reveal.revealed(start + MS * 99), 0);
        assert_eq!(reveal.revealed(start + MS * 100), 1);
        assert_eq!(reveal.revealed(start + MS * 250), 2);
        assert!(!reveal.is_finished(start + MS * 499));
        assert_eq!(reveal.revealed(start + MS * 500), 5);
        assert!(reveal.is_finished(start + MS * 500));
        assert_eq!(reveal.revealed(start + MS * 10_000), 5);
    }

    #[test]
    fn reveal_before_start_shows_nothing() {
        let start = Instant::now() + MS * 50;
        let reveal = Reveal::new(start, MS * 100, 5);
        assert_eq!(reveal.revealed(start - MS * 10), 0);
    }

    #[test]
    fn zero_interval_reveals_immediately() {
        let start = Instant::now();
        let reveal = Reveal::new(start, Duration::ZERO, 5);
        assert!(reveal.is_finished(start));
    }

    #[test]
    fn reveal_finish_time() {
        let start = Instant::now();
        let reveal = Reveal::new(start, MS * 100, 5);
        assert_eq!(reveal.finishes_at(), start + MS * 500);
    }

    #[test]
    fn toast_visible_until_deadline() {
        let now = Instant::now();
        let mut slot = ToastSlot::default();
        slot.show("Not enough letters", MS * 1500, now);

        assert_eq!(slot.visible(now), Some("Not enough letters"));
        assert_eq!(slot.visible(now + MS * 1499), Some("Not enough letters"));
        assert_eq!(slot.visible(now + MS * 1500), None);
    }

    #[test]
    fn newer_toast_cancels_older_dismissal() {
        let now = Instant::now();
        let mut slot = ToastSlot::default();
        slot.show("first", MS * 1500, now);
        slot.show("second", MS * 1500, now + MS * 1000);

        // The first deadline no longer applies
        assert!(!slot.expire(now + MS * 1600));
        assert_eq!(slot.visible(now + MS * 1600), Some("second"));
        assert!(slot.expire(now + MS * 2500));
        assert_eq!(slot.visible(now + MS * 2500), None);
    }
}
