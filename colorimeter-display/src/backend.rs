//! Panel driver seam
//!
//! A backend knows fonts and pixels; the rest of the crate only deals in
//! character rows. [`present`] pushes a [`Screen`] through it.

use crate::screen::{Screen, SCREEN_COLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus write to the panel failed
    Communication,
    /// Row or column outside the panel
    OutOfBounds,
}

/// Character-cell panel
pub trait DisplayBackend {
    /// Blank the frame buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write `text` starting at character cell (`row`, `col`)
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Invert cells `start_col..end_col` of `row`
    fn invert_region(&mut self, row: u8, start_col: u8, end_col: u8) -> Result<(), DisplayError>;

    /// Send the frame buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}

/// Redraw the panel if the screen changed since the last call
pub fn present<B: DisplayBackend>(
    screen: &mut Screen,
    backend: &mut B,
) -> Result<(), DisplayError> {
    if !screen.is_dirty() {
        return Ok(());
    }
    backend.clear()?;
    for (row, text) in screen.rows().enumerate() {
        if !text.is_empty() {
            backend.draw_text(row as u8, 0, text)?;
        }
    }
    if let Some(row) = screen.inverted_row() {
        backend.invert_region(row as u8, 0, SCREEN_COLS as u8)?;
    }
    backend.flush()?;
    screen.mark_clean();
    Ok(())
}
