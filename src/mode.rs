//! Mode selection state machine.
//!
//! The device runs one of three modes: the Home menu, the Chronometer, and
//! the HeartRate monitor. [`ModeController`] owns the current mode and the
//! menu cursor, consumes one set of debounced button edges per tick, and
//! reports what happened as an [`Action`] for the main loop to interpret
//! (chronometer side effects, frame clearing, settle delay).
//!
//! # Exit Handling
//!
//! The exit button (`Next`) is evaluated here, before any mode's inner tick
//! runs, so the check always sees fresh button state: one uniform rule,
//! `Next` leaves any non-Home mode. There is no terminal state; closing the
//! device window is power-off.

use crate::buttons::ButtonEdges;

/// Operating modes of the device.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Mode {
    /// Menu for picking one of the other modes.
    #[default]
    Home,
    /// Start/pause/reset timer.
    Chronometer,
    /// Waveform plot with BPM readout.
    HeartRate,
}

/// Menu entries on the Home screen, in display order.
pub const MENU_OPTIONS: [Mode; 2] = [Mode::Chronometer, Mode::HeartRate];

/// Labels for the menu entries, index-aligned with [`MENU_OPTIONS`].
pub const MENU_LABELS: [&str; 2] = ["Chronometer", "Heart rate"];

/// What a tick's button edges amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Menu cursor moved (either direction).
    CursorMoved,
    /// Entered the highlighted mode from Home.
    Entered(Mode),
    /// Left the active mode for Home.
    ExitedToHome,
    /// Chronometer run/pause toggle requested.
    ToggleChrono,
    /// Chronometer reset requested.
    ResetChrono,
}

/// Finite-state controller over [`Mode`], driven by button edges.
pub struct ModeController {
    mode: Mode,
    /// Highlighted entry of [`MENU_OPTIONS`] while in Home.
    cursor: usize,
}

impl ModeController {
    /// Start on the Home menu with the first entry highlighted.
    pub const fn new() -> Self {
        Self {
            mode: Mode::Home,
            cursor: 0,
        }
    }

    /// Currently active mode.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Highlighted menu entry index.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply one tick's button edges; at most one action per tick.
    ///
    /// Runs before the active mode's tick so the exit check always happens
    /// on fresh button state.
    pub fn apply(&mut self, edges: ButtonEdges) -> Option<Action> {
        // Exit button first: leaves any non-Home mode.
        if edges.next && self.mode != Mode::Home {
            self.mode = Mode::Home;
            return Some(Action::ExitedToHome);
        }

        match self.mode {
            Mode::Home => {
                if edges.prev {
                    self.cursor = (self.cursor + MENU_OPTIONS.len() - 1) % MENU_OPTIONS.len();
                    return Some(Action::CursorMoved);
                }
                if edges.next {
                    self.cursor = (self.cursor + 1) % MENU_OPTIONS.len();
                    return Some(Action::CursorMoved);
                }
                if edges.select {
                    self.mode = MENU_OPTIONS[self.cursor];
                    return Some(Action::Entered(self.mode));
                }
                None
            }
            Mode::Chronometer => {
                if edges.select {
                    return Some(Action::ToggleChrono);
                }
                if edges.prev {
                    return Some(Action::ResetChrono);
                }
                None
            }
            // Prev/Select are unassigned on the heart-rate screen.
            Mode::HeartRate => None,
        }
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
