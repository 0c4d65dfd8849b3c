#![forbid(unsafe_code)]

//! The screen buffer: a row-major cell grid with clipped writes.
//!
//! # Contract
//!
//! - Writes through [`Buffer::set`] are silently clipped: out-of-bounds
//!   coordinates are a no-op, never a fault. Callers may draw without
//!   bounds arithmetic.
//! - Unset cells read as [`Cell::EMPTY`].
//! - `resize` reallocates and blanks the grid (terminal resize path).

use textwall_core::geometry::Rect;

use crate::cell::Cell;

/// A rectangular grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer of the given size, filled with [`Cell::EMPTY`].
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
        }
    }

    /// Buffer width in columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area as a rectangle at the origin.
    #[inline]
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    const fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Write a cell. Out-of-bounds writes are silently dropped.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Read a cell, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Read a cell without bounds checking the coordinates against the
    /// grid (they are still checked by the slice index).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the buffer. Used by the diff
    /// and presenter, which iterate within known bounds.
    #[inline]
    #[must_use]
    pub fn get_unchecked(&self, x: u16, y: u16) -> &Cell {
        &self.cells[self.index(x, y)]
    }

    /// Fill a rectangular region, clipped to the buffer.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let clipped = rect.intersection(&self.area());
        for y in clipped.top()..clipped.bottom() {
            for x in clipped.left()..clipped.right() {
                let idx = self.index(x, y);
                self.cells[idx] = cell;
            }
        }
    }

    /// Reset every cell to [`Cell::EMPTY`].
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Resize the grid, blanking all content.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::EMPTY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Color;

    #[test]
    fn new_buffer_is_blank() {
        let buf = Buffer::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                assert!(buf.get(x, y).is_some_and(Cell::is_blank));
            }
        }
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut buf = Buffer::new(10, 5);
        let cell = Cell::new('x', Color::RainBright);
        buf.set(3, 2, cell);
        assert_eq!(buf.get(3, 2), Some(&cell));
    }

    #[test]
    fn out_of_bounds_set_is_noop() {
        let mut buf = Buffer::new(4, 4);
        buf.set(4, 0, Cell::from_char('x'));
        buf.set(0, 4, Cell::from_char('x'));
        buf.set(u16::MAX, u16::MAX, Cell::from_char('x'));
        for y in 0..4 {
            for x in 0..4 {
                assert!(buf.get(x, y).is_some_and(Cell::is_blank));
            }
        }
    }

    #[test]
    fn out_of_bounds_get_is_none() {
        let buf = Buffer::new(4, 4);
        assert!(buf.get(4, 0).is_none());
        assert!(buf.get(0, 4).is_none());
    }

    #[test]
    fn fill_clips_to_buffer() {
        let mut buf = Buffer::new(4, 4);
        buf.fill(Rect::new(2, 2, 10, 10), Cell::from_char('#'));
        assert_eq!(buf.get(3, 3), Some(&Cell::from_char('#')));
        assert_eq!(buf.get(2, 2), Some(&Cell::from_char('#')));
        assert!(buf.get(1, 1).is_some_and(Cell::is_blank));
    }

    #[test]
    fn clear_blanks_everything() {
        let mut buf = Buffer::new(3, 3);
        buf.fill(buf.area(), Cell::from_char('#'));
        buf.clear();
        assert!(buf.get(1, 1).is_some_and(Cell::is_blank));
    }

    #[test]
    fn resize_blanks_and_changes_dims() {
        let mut buf = Buffer::new(3, 3);
        buf.set(0, 0, Cell::from_char('x'));
        buf.resize(5, 2);
        assert_eq!(buf.width(), 5);
        assert_eq!(buf.height(), 2);
        assert!(buf.get(0, 0).is_some_and(Cell::is_blank));
        assert!(buf.get(4, 1).is_some());
        assert!(buf.get(0, 2).is_none());
    }

    #[test]
    fn zero_sized_buffer_never_faults() {
        let mut buf = Buffer::new(0, 0);
        buf.set(0, 0, Cell::from_char('x'));
        assert!(buf.get(0, 0).is_none());
        buf.fill(Rect::new(0, 0, 5, 5), Cell::from_char('x'));
        buf.clear();
    }
}
