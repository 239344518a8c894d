//! Chronometer screen.
//!
//! Large `HH:MM:SS` readout, run/pause status, and a key-hint line. The
//! elapsed value comes from the chronometer state plus the current monotonic
//! instant, so the readout advances while running and freezes while paused.

use core::convert::Infallible;
use std::time::Duration;

use embedded_graphics::{prelude::*, primitives::Line, text::Text};

use crate::chronometer::{Chronometer, format_hms};
use crate::frame::Frame;
use crate::styles::{CENTERED, LABEL_STYLE, STROKE, TIMER_STYLE};

// =============================================================================
// Chronometer Layout Constants
// =============================================================================

/// Title baseline, centered horizontally.
const TITLE_POS: Point = Point::new(64, 10);

/// Divider line below the title.
const DIVIDER_START: Point = Point::new(0, 14);
const DIVIDER_END: Point = Point::new(127, 14);

/// Baseline of the elapsed-time readout, centered.
const ELAPSED_POS: Point = Point::new(64, 38);

/// Baseline of the run/pause status line, centered.
const STATUS_POS: Point = Point::new(64, 50);

/// Baseline of the key-hint line at the bottom edge.
const HINT_POS: Point = Point::new(0, 62);

/// Render the chronometer screen as of `now`.
pub fn draw(frame: &mut Frame, chrono: &Chronometer, now: Duration) -> Result<(), Infallible> {
    frame.clear_all();

    Text::with_text_style("CHRONOMETER", TITLE_POS, LABEL_STYLE, CENTERED).draw(frame)?;
    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(STROKE)
        .draw(frame)?;

    let elapsed = format_hms(chrono.elapsed(now));
    Text::with_text_style(&elapsed, ELAPSED_POS, TIMER_STYLE, CENTERED).draw(frame)?;

    let status = if chrono.is_running() { "RUNNING" } else { "PAUSED" };
    Text::with_text_style(status, STATUS_POS, LABEL_STYLE, CENTERED).draw(frame)?;

    Text::new("SEL:run/stop PRV:rst", HINT_POS, LABEL_STYLE).draw(frame)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
