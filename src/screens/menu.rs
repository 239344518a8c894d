//! Home menu screen.
//!
//! Title bar, divider, and the mode list with a `>` marker on the
//! highlighted entry. The whole screen repaints every tick; nothing here
//! carries state beyond the cursor passed in.

use core::convert::Infallible;
use core::fmt::Write;

use embedded_graphics::{
    prelude::*,
    primitives::Line,
    text::Text,
};
use heapless::String;

use crate::frame::Frame;
use crate::mode::MENU_LABELS;
use crate::styles::{CENTERED, LABEL_STYLE, STROKE};

// =============================================================================
// Menu Layout Constants
// =============================================================================

/// Title baseline, centered horizontally.
const TITLE_POS: Point = Point::new(64, 10);

/// Divider line below the title.
const DIVIDER_START: Point = Point::new(0, 14);
const DIVIDER_END: Point = Point::new(127, 14);

/// X position of the menu entries.
const ENTRY_X: i32 = 8;

/// Baseline of the first menu entry.
const ENTRY_START_Y: i32 = 30;

/// Vertical spacing between entries.
const ENTRY_LINE_HEIGHT: i32 = 12;

/// Baseline of the key-hint line at the bottom edge.
const HINT_POS: Point = Point::new(0, 62);

/// Render the Home menu with the cursor on `cursor`.
pub fn draw(frame: &mut Frame, cursor: usize) -> Result<(), Infallible> {
    frame.clear_all();

    Text::with_text_style("PULSE MONITOR", TITLE_POS, LABEL_STYLE, CENTERED).draw(frame)?;
    Line::new(DIVIDER_START, DIVIDER_END)
        .into_styled(STROKE)
        .draw(frame)?;

    for (row, label) in MENU_LABELS.iter().enumerate() {
        let marker = if row == cursor { ">" } else { " " };
        let mut line: String<24> = String::new();
        let _ = write!(line, "{marker} {label}");
        let y = ENTRY_START_Y + row as i32 * ENTRY_LINE_HEIGHT;
        Text::new(&line, Point::new(ENTRY_X, y), LABEL_STYLE).draw(frame)?;
    }

    Text::new("PRV/NXT:move SEL:open", HINT_POS, LABEL_STYLE).draw(frame)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(cursor: usize) -> Vec<bool> {
        let mut frame = Frame::new();
        draw(&mut frame, cursor).unwrap();
        frame
            .colors()
            .map(|c| c.is_on())
            .collect()
    }

    #[test]
    fn test_menu_renders_content() {
        let pixels = rendered(0);
        assert!(
            pixels.iter().any(|&on| on),
            "Menu screen should not be blank"
        );
    }

    #[test]
    fn test_cursor_position_changes_frame() {
        assert_ne!(
            rendered(0),
            rendered(1),
            "Moving the cursor must move the marker"
        );
    }

    #[test]
    fn test_marker_sits_on_highlighted_row() {
        let mut frame = Frame::new();
        draw(&mut frame, 1).unwrap();

        // The '>' marker occupies the left column band of the second entry
        // row; the first entry row's marker band stays blank.
        let row0_marker = (ENTRY_START_Y - 8..=ENTRY_START_Y)
            .any(|y| (ENTRY_X..ENTRY_X + 6).any(|x| frame.pixel(x, y)));
        let row1_y = ENTRY_START_Y + ENTRY_LINE_HEIGHT;
        let row1_marker =
            (row1_y - 8..=row1_y).any(|y| (ENTRY_X..ENTRY_X + 6).any(|x| frame.pixel(x, y)));

        assert!(!row0_marker, "Unhighlighted entry should have no marker");
        assert!(row1_marker, "Highlighted entry should carry the marker");
    }
}
