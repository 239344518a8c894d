//! Pre-computed text and primitive styles.
//!
//! `MonoTextStyle`, `TextStyle`, and `PrimitiveStyle` constructors are const
//! fn in embedded-graphics 0.8, so every style the screens use is computed at
//! compile time instead of being rebuilt each frame. The display is one-bit,
//! so there are exactly two "colors": on and off.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    primitives::PrimitiveStyle,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_12_POINT, PROFONT_14_POINT};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Used for titles and the chronometer readout.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

// =============================================================================
// Text Styles
// =============================================================================

/// Small text: time label, menu entries, key hints.
pub const LABEL_STYLE: MonoTextStyle<'static, BinaryColor> =
    MonoTextStyle::new(&FONT_6X10, BinaryColor::On);

/// BPM readout on the heart-rate screen.
pub const BPM_STYLE: MonoTextStyle<'static, BinaryColor> =
    MonoTextStyle::new(&PROFONT_12_POINT, BinaryColor::On);

/// Large elapsed-time readout on the chronometer screen.
pub const TIMER_STYLE: MonoTextStyle<'static, BinaryColor> =
    MonoTextStyle::new(&PROFONT_14_POINT, BinaryColor::On);

// =============================================================================
// Primitive Styles
// =============================================================================

/// Single-pixel stroke for the waveform segments and divider lines.
pub const STROKE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

/// Fill for clearing regions (text overlay) back to black.
pub const CLEAR_FILL: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_fill(BinaryColor::Off);
