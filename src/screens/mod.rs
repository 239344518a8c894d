//! Per-mode screens.
//!
//! Each screen is a draw function (or a draw function plus a small state
//! struct) targeting the shared [`Frame`](crate::frame::Frame). The main
//! loop picks the screen matching the active mode and presents the frame
//! once per tick.

pub mod chrono;
pub mod menu;
pub mod pulse;
pub mod splash;

use embedded_graphics::{
    image::{Image, ImageRaw},
    pixelcolor::BinaryColor,
    prelude::*,
};

/// 9x9 heart glyph, one bit per pixel, each row padded to two bytes.
#[rustfmt::skip]
const HEART_DATA: [u8; 18] = [
    0b0000_0000, 0b0000_0000,
    0b0110_0011, 0b0000_0000,
    0b1111_0111, 0b1000_0000,
    0b1111_1111, 0b1000_0000,
    0b1111_1111, 0b1000_0000,
    0b0111_1111, 0b0000_0000,
    0b0011_1110, 0b0000_0000,
    0b0001_1100, 0b0000_0000,
    0b0000_1000, 0b0000_0000,
];

/// Width of the heart glyph in pixels.
pub(crate) const HEART_WIDTH: u32 = 9;

/// Draw the heart glyph with its top-left corner at `pos`.
pub(crate) fn draw_heart<D>(target: &mut D, pos: Point) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let raw = ImageRaw::<BinaryColor>::new(&HEART_DATA, HEART_WIDTH);
    Image::new(&raw, pos).draw(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;

    #[test]
    fn test_heart_glyph_pixels() {
        let mut frame = Frame::new();
        draw_heart(&mut frame, Point::new(0, 10)).unwrap();

        // Bottom tip of the heart: glyph row 8, column 4.
        assert!(frame.pixel(4, 18), "Heart tip should be set");
        // Solid middle rows.
        assert!(frame.pixel(0, 12) && frame.pixel(8, 12), "Row 2 spans the full width");
        // Blank first row and notch between the lobes.
        assert!(!frame.pixel(4, 10), "Top row of the glyph is blank");
        assert!(!frame.pixel(4, 11), "Notch between the lobes is blank");
    }
}
