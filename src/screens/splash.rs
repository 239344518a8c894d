//! Boot splash screen.
//!
//! Shown once at startup before the Home menu: the heart glyph over the
//! device name, held briefly while the window stays responsive to close
//! events. Returns `false` if the user closes the window during the splash.

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, text::Text};
use embedded_graphics_simulator::{SimulatorDisplay, SimulatorEvent, Window};

use crate::frame::Frame;
use crate::screens::{HEART_WIDTH, draw_heart};
use crate::styles::{CENTERED, LABEL_STYLE};

/// How long the splash stays up.
const SPLASH_DURATION: Duration = Duration::from_millis(1200);

/// Top-left corner of the heart glyph, horizontally centered.
const HEART_POS: Point = Point::new((128 - HEART_WIDTH as i32) / 2, 18);

/// Title baseline, centered below the glyph.
const TITLE_POS: Point = Point::new(64, 44);

/// Run the splash screen.
///
/// Returns `false` if the window is closed while the splash is up, `true`
/// once the hold time elapses.
pub fn run(
    frame: &mut Frame,
    display: &mut SimulatorDisplay<BinaryColor>,
    window: &mut Window,
) -> bool {
    frame.clear_all();
    draw_heart(frame, HEART_POS).ok();
    Text::with_text_style("PULSE MONITOR", TITLE_POS, LABEL_STYLE, CENTERED)
        .draw(frame)
        .ok();

    frame.present(display).ok();
    window.update(display);

    let start = Instant::now();
    while start.elapsed() < SPLASH_DURATION {
        for ev in window.events() {
            if matches!(ev, SimulatorEvent::Quit) {
                return false;
            }
        }
        thread::sleep(Duration::from_millis(16));
    }
    true
}
