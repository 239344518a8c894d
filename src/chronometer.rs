//! Start/pause/reset chronometer state.
//!
//! The chronometer accumulates elapsed time across run stretches. While
//! running it remembers the instant it was last resumed; pausing folds the
//! open stretch into the accumulated total. Reset zeroes the total and
//! forces the paused state. All instants are monotonic time since boot,
//! supplied by the caller, so the state itself is pure and testable.

use core::fmt::Write;
use std::time::Duration;

use heapless::String;

/// Accumulated-duration timer driven by button actions.
pub struct Chronometer {
    /// Time accumulated over completed run stretches.
    accumulated: Duration,
    /// Start of the open run stretch; `None` while paused.
    resumed_at: Option<Duration>,
}

impl Chronometer {
    /// Create a paused chronometer at zero.
    pub const fn new() -> Self {
        Self {
            accumulated: Duration::ZERO,
            resumed_at: None,
        }
    }

    /// True while the chronometer is counting.
    pub const fn is_running(&self) -> bool {
        self.resumed_at.is_some()
    }

    /// Toggle between running and paused.
    ///
    /// Resuming records `now`; pausing folds `now - resume_instant` into
    /// the accumulated total.
    pub fn toggle(&mut self, now: Duration) {
        match self.resumed_at.take() {
            Some(resumed) => self.accumulated += now.saturating_sub(resumed),
            None => self.resumed_at = Some(now),
        }
    }

    /// Zero the accumulated time and force the paused state.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.resumed_at = None;
    }

    /// Total elapsed time as of `now`, including any open run stretch.
    pub fn elapsed(&self, now: Duration) -> Duration {
        match self.resumed_at {
            Some(resumed) => self.accumulated + now.saturating_sub(resumed),
            None => self.accumulated,
        }
    }
}

impl Default for Chronometer {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a duration as zero-padded `HH:MM:SS`.
///
/// Plain integer division/modulo on total seconds; totals above 99 hours
/// simply widen the hour field.
pub fn format_hms(elapsed: Duration) -> String<16> {
    let total = elapsed.as_secs();
    let mut out: String<16> = String::new();
    let _ = write!(
        out,
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    );
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
