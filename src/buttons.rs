//! Button debounce handling.
//!
//! Provides time-based edge detection with debouncing to prevent multiple
//! triggers from contact bounce on physical buttons. The simulator feeds
//! key-held levels into the same path a hardware build would feed GPIO
//! levels, so the debounce logic is exercised either way. The additional
//! post-action settle delay lives in the main loop
//! (`crate::config::SETTLE_DELAY`).

use std::time::{Duration, Instant};

/// Debounce duration in milliseconds.
pub const DEBOUNCE_MS: u64 = 50;

/// One tick's worth of recognized button edges, one flag per input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonEdges {
    pub prev: bool,
    pub select: bool,
    pub next: bool,
}

/// Button debounce state with time-based edge detection.
pub struct ButtonState {
    was_pressed: bool,
    last_change: Option<Instant>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change: None,
        }
    }

    /// Returns true only on the edge where the button becomes pressed.
    ///
    /// `pressed` is the current level (physical buttons are active-low; the
    /// caller translates). State changes inside the debounce window are
    /// ignored so contact bounce cannot double-trigger.
    pub fn just_pressed(&mut self, pressed: bool) -> bool {
        if pressed != self.was_pressed {
            if let Some(last) = self.last_change
                && last.elapsed() < Duration::from_millis(DEBOUNCE_MS)
            {
                return false;
            }

            self.was_pressed = pressed;
            self.last_change = Some(Instant::now());

            return pressed;
        }

        false
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
