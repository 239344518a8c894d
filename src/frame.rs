//! Owned monochrome framebuffer for the 128x64 OLED.
//!
//! All screens draw into a [`Frame`] through the `embedded-graphics`
//! `DrawTarget` trait, and the main loop blits the finished frame to the
//! simulator display once per tick. This mirrors the buffered-graphics mode
//! of the real display driver: cheap pixel writes into an owned buffer,
//! one flush per frame.
//!
//! The frame also provides the one primitive the graphics library has no
//! equivalent for: [`Frame::scroll_left`], which shifts the whole buffer one
//! column left so the waveform plot can advance without redrawing history.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

const WIDTH: usize = SCREEN_WIDTH as usize;
const HEIGHT: usize = SCREEN_HEIGHT as usize;

/// In-memory 128x64 one-bit frame.
///
/// Out-of-bounds draws are ignored, matching `DrawTarget` conventions, so
/// clipped primitives degrade silently instead of failing.
pub struct Frame {
    pixels: [bool; WIDTH * HEIGHT],
}

impl Frame {
    /// Create a blank (all pixels off) frame.
    pub const fn new() -> Self {
        Self {
            pixels: [false; WIDTH * HEIGHT],
        }
    }

    /// Turn every pixel off.
    pub fn clear_all(&mut self) {
        self.pixels.fill(false);
    }

    /// Shift the entire frame one pixel column to the left.
    ///
    /// The rightmost column becomes blank; callers plot the newest waveform
    /// segment into it afterwards.
    pub fn scroll_left(&mut self) {
        for row in self.pixels.chunks_exact_mut(WIDTH) {
            row.copy_within(1.., 0);
            row[WIDTH - 1] = false;
        }
    }

    /// Read a single pixel. Out-of-bounds coordinates read as off.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) if x < WIDTH && y < HEIGHT => self.pixels[y * WIDTH + x],
            _ => false,
        }
    }

    /// Row-major pixel colors, for blitting with `fill_contiguous`.
    pub fn colors(&self) -> impl Iterator<Item = BinaryColor> + '_ {
        self.pixels
            .iter()
            .map(|&on| if on { BinaryColor::On } else { BinaryColor::Off })
    }

    /// Blit the whole frame onto another draw target (the simulator display).
    pub fn present<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let area = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        target.fill_contiguous(&area, self.colors())
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for Frame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(coord.x), usize::try_from(coord.y))
                && x < WIDTH
                && y < HEIGHT
            {
                self.pixels[y * WIDTH + x] = color.is_on();
            }
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
