//! Heart-rate screen: scrolling waveform plot with time and BPM overlay.
//!
//! This is a direct mapping from the tick's values to draw commands, with no
//! decision logic of its own: scroll the frame one column left, plot the
//! connecting segment for the newest sample at the right edge, then repaint
//! the text overlay (time label, BPM readout, heart glyph). Every tick draws
//! a frame; the only thing ever skipped is the waveform segment, and only
//! when the window is degenerate (`max == min`) and no scale exists.

use core::convert::Infallible;
use core::fmt::Write;

use embedded_graphics::{
    prelude::*,
    primitives::{Line, Rectangle},
    text::Text,
};
use heapless::String;

use crate::config::{
    SCREEN_WIDTH, TEXT_AREA_HEIGHT, WAVE_BASELINE_Y, WAVE_HEIGHT, WAVE_SEG_X0, WAVE_SEG_X1,
};
use crate::frame::Frame;
use crate::screens::draw_heart;
use crate::styles::{BPM_STYLE, CLEAR_FILL, LABEL_STYLE, STROKE};

// =============================================================================
// Overlay Layout Constants
// =============================================================================

/// Top-left corner of the text overlay region.
const TEXT_AREA_POS: Point = Point::new(0, 0);

/// Size of the text overlay region (full width, top rows).
const TEXT_AREA_SIZE: Size = Size::new(SCREEN_WIDTH, TEXT_AREA_HEIGHT);

/// Baseline of the time label (FONT_6X10 in the top row band).
const TIME_POS: Point = Point::new(0, 8);

/// Baseline of the BPM readout, to the right of the heart glyph.
const BPM_POS: Point = Point::new(12, 19);

/// Top-left corner of the heart glyph.
const HEART_POS: Point = Point::new(0, 10);

// =============================================================================
// Waveform State
// =============================================================================

/// Y coordinate of the previously plotted point, so consecutive samples
/// connect into a continuous trace.
pub struct Waveform {
    last_y: i32,
}

impl Waveform {
    /// Start with the trace resting on the waveform baseline.
    pub const fn new() -> Self {
        Self {
            last_y: WAVE_BASELINE_Y,
        }
    }

    /// Drop the trace back to the baseline (on re-entering the screen).
    pub const fn reset(&mut self) {
        self.last_y = WAVE_BASELINE_Y;
    }

    /// Y coordinate of the last plotted point.
    #[allow(dead_code)] // Exercised by the plot tests
    pub const fn last_y(&self) -> i32 {
        self.last_y
    }
}

impl Default for Waveform {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a sample into the waveform band.
///
/// Callers guarantee `max > min` and `min <= sample <= max` (the sample is
/// part of the window the bounds came from). The result always lies within
/// `WAVE_BASELINE_Y - WAVE_HEIGHT ..= WAVE_BASELINE_Y`.
pub(crate) fn plot_y(sample: u16, min: u16, max: u16) -> i32 {
    WAVE_BASELINE_Y - (WAVE_HEIGHT * i32::from(sample - min)) / i32::from(max - min)
}

// =============================================================================
// Screen Drawing
// =============================================================================

/// Render one heart-rate frame.
///
/// `min`/`max` are the current window bounds used for waveform auto-scaling;
/// a degenerate window skips only the segment plot, never the overlay.
pub fn draw(
    frame: &mut Frame,
    wave: &mut Waveform,
    time_label: &str,
    bpm: f32,
    sample: u16,
    min: u16,
    max: u16,
) -> Result<(), Infallible> {
    frame.scroll_left();

    if max > min {
        let y = plot_y(sample, min, max);
        Line::new(Point::new(WAVE_SEG_X0, wave.last_y), Point::new(WAVE_SEG_X1, y))
            .into_styled(STROKE)
            .draw(frame)?;
        wave.last_y = y;
    }

    // Repaint the overlay: the scroll shifted the old text one column left.
    Rectangle::new(TEXT_AREA_POS, TEXT_AREA_SIZE)
        .into_styled(CLEAR_FILL)
        .draw(frame)?;

    Text::new(time_label, TIME_POS, LABEL_STYLE).draw(frame)?;

    let mut bpm_text: String<16> = String::new();
    let _ = write!(bpm_text, "{} bpm", bpm as i32);
    Text::new(&bpm_text, BPM_POS, BPM_STYLE).draw(frame)?;

    draw_heart(frame, HEART_POS)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
