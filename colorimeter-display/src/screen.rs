//! Text frame for the 8 x 21 character panel
//!
//! The colorimeter only ever highlights a whole row (menu cursor, selected
//! sensor), so a frame is its rows plus at most one inverted row.

use heapless::String;

pub const SCREEN_ROWS: usize = 8;
pub const SCREEN_COLS: usize = 21;

/// Bytes per row; unit symbols are two bytes each in UTF-8
pub const LINE_LEN: usize = SCREEN_COLS * 2;

pub type Row = String<LINE_LEN>;

/// One frame of text
#[derive(Clone)]
pub struct Screen {
    rows: [Row; SCREEN_ROWS],
    inverted: Option<usize>,
    /// Set on any edit, cleared once the panel has been redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            rows: core::array::from_fn(|_| Row::new()),
            inverted: None,
            dirty: true,
        }
    }

    /// Replace a row, keeping the first [`SCREEN_COLS`] characters
    ///
    /// Rows past the bottom are ignored.
    pub fn set_row(&mut self, row: usize, text: &str) {
        let Some(line) = self.rows.get_mut(row) else {
            return;
        };
        line.clear();
        for c in text.chars().take(SCREEN_COLS) {
            if line.push(c).is_err() {
                break;
            }
        }
        self.dirty = true;
    }

    pub fn row(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(Row::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(Row::as_str)
    }

    /// Draw `row` inverted; replaces any earlier highlight
    pub fn invert_row(&mut self, row: usize) {
        if row < SCREEN_ROWS {
            self.inverted = Some(row);
            self.dirty = true;
        }
    }

    pub fn inverted_row(&self) -> Option<usize> {
        self.inverted
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Same text and highlight, whatever the dirty flags
    pub fn same_content(&self, other: &Screen) -> bool {
        self.rows == other.rows && self.inverted == other.inverted
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen(inverted={}) [", self.inverted);
        for row in self.rows.iter() {
            defmt::write!(f, "{} | ", row.as_str());
        }
        defmt::write!(f, "]");
    }
}
