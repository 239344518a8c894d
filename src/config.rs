//! Application configuration constants.
//!
//! All geometry, capacity, and timing values live here as documented `const`s
//! so the drawing and detection code never recomputes them at runtime. The
//! waveform band constants are pre-computed from the display geometry the
//! same way the layout constants are.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1306-class OLED: 128x64).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

/// Height of the text overlay region at the top of the HeartRate screen.
/// Cleared every frame before the time label and BPM readout are drawn.
pub const TEXT_AREA_HEIGHT: u32 = 20;

// =============================================================================
// Waveform Plot Band
// =============================================================================

/// X column of the previous plotted point (segments connect 125 -> 126).
pub const WAVE_SEG_X0: i32 = 125;

/// X column where the newest sample is plotted.
pub const WAVE_SEG_X1: i32 = 126;

/// Bottom row of the waveform band. Row 63 is the last valid row of the
/// display, so the full band stays on screen.
pub const WAVE_BASELINE_Y: i32 = (SCREEN_HEIGHT - 1) as i32;

/// Vertical extent of the waveform band in pixels. A full-scale sample
/// plots at `WAVE_BASELINE_Y - WAVE_HEIGHT` = row 42.
pub const WAVE_HEIGHT: i32 = 21;

// =============================================================================
// Beat Detection Configuration
// =============================================================================

/// Number of samples retained in the rolling analysis window.
/// One sample per loop tick, so this is also the visible waveform history.
pub const MAX_HISTORY: usize = 128;

/// Number of beat timestamps retained for the BPM estimate.
/// Older beats age out FIFO; the estimate follows the surviving window.
pub const MAX_BEATS: usize = 30;

/// Full-scale ADC reading (12-bit converter).
pub const ADC_MAX: u16 = 4095;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if a tick completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Pause after a recognized button action. Stalls the whole loop on purpose:
/// suppresses contact bounce and held-button repeats on a device with no
/// concurrent duties.
pub const SETTLE_DELAY: Duration = Duration::from_millis(200);
