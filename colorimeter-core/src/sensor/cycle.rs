//! Cyclic index over an ordered setting enumeration
//!
//! The gain and itime buttons step a sensor through its levels, wrapping
//! from the last level back to the first. The cursor is seeded from the
//! configured value with `seek`, which never loops: an unknown value leaves
//! the cursor where it was.

use core::marker::PhantomData;

/// An ordered, closed set of setting levels
pub trait Level: Copy + PartialEq + 'static {
    /// All levels in cycling order (must be non-empty)
    const ALL: &'static [Self];

    /// Position of `self` in [`Level::ALL`]
    fn position(self) -> Option<usize> {
        Self::ALL.iter().position(|&l| l == self)
    }
}

/// Wrapping cursor over a [`Level`] enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclicIndex<T: Level> {
    index: usize,
    _level: PhantomData<T>,
}

impl<T: Level> Default for CyclicIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Level> CyclicIndex<T> {
    /// Create a cursor at the first level
    pub const fn new() -> Self {
        Self {
            index: 0,
            _level: PhantomData,
        }
    }

    /// Create a cursor positioned at `value`
    pub fn seeded(value: T) -> Self {
        let mut cycle = Self::new();
        cycle.seek(value);
        cycle
    }

    /// Move the cursor to `value`
    ///
    /// Returns false (cursor unchanged) if `value` is not a member.
    pub fn seek(&mut self, value: T) -> bool {
        match value.position() {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// Level under the cursor
    pub fn current(&self) -> T {
        T::ALL[self.index]
    }

    /// Advance to the next level, wrapping, and return it
    pub fn advance(&mut self) -> T {
        self.index = (self.index + 1) % T::ALL.len();
        self.current()
    }
}
