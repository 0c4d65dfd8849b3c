#![forbid(unsafe_code)]

//! Drawing primitives for the buffer.
//!
//! Ergonomic helpers on top of `Buffer::set()` so the compositor can draw
//! borders and text without duplicating low-level cell loops. All
//! operations inherit `Buffer::set()`'s clipping.

use textwall_core::geometry::Rect;

use crate::buffer::Buffer;
use crate::cell::{Cell, Color};

/// Characters used to draw a border around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    /// Simple box-drawing characters (U+250x).
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// ASCII-only border.
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };
}

/// Extension trait for drawing on a Buffer.
pub trait Draw {
    /// Draw a horizontal line of cells.
    fn draw_horizontal_line(&mut self, x: u16, y: u16, width: u16, cell: Cell);

    /// Draw a vertical line of cells.
    fn draw_vertical_line(&mut self, x: u16, y: u16, height: u16, cell: Cell);

    /// Draw a border around a rectangle using the given characters.
    ///
    /// The border is drawn inside the rectangle (edges + corners) with
    /// the given color.
    fn draw_border(&mut self, rect: Rect, chars: BorderChars, color: Color);

    /// Print text at the given coordinates in the given color.
    ///
    /// Stops at the buffer edge. Zero-width characters are skipped.
    /// Returns the x position after the last character.
    fn print_text(&mut self, x: u16, y: u16, text: &str, color: Color) -> u16;

    /// Print text with a right-side clipping boundary.
    ///
    /// Like `print_text` but stops at `max_x` (exclusive). Returns the x
    /// position after the last character.
    fn print_text_clipped(&mut self, x: u16, y: u16, text: &str, color: Color, max_x: u16) -> u16;
}

impl Draw for Buffer {
    fn draw_horizontal_line(&mut self, x: u16, y: u16, width: u16, cell: Cell) {
        for i in 0..width {
            self.set(x.saturating_add(i), y, cell);
        }
    }

    fn draw_vertical_line(&mut self, x: u16, y: u16, height: u16, cell: Cell) {
        for i in 0..height {
            self.set(x, y.saturating_add(i), cell);
        }
    }

    fn draw_border(&mut self, rect: Rect, chars: BorderChars, color: Color) {
        if rect.is_empty() {
            return;
        }

        let h_cell = Cell::new(chars.horizontal, color);
        let v_cell = Cell::new(chars.vertical, color);

        // Top edge
        self.draw_horizontal_line(rect.left(), rect.top(), rect.width, h_cell);

        // Bottom edge
        if rect.height > 1 {
            self.draw_horizontal_line(rect.left(), rect.bottom() - 1, rect.width, h_cell);
        }

        // Left edge (excluding corners)
        if rect.height > 2 {
            self.draw_vertical_line(rect.left(), rect.top() + 1, rect.height - 2, v_cell);
        }

        // Right edge (excluding corners)
        if rect.width > 1 && rect.height > 2 {
            self.draw_vertical_line(rect.right() - 1, rect.top() + 1, rect.height - 2, v_cell);
        }

        // Corners (drawn last to overwrite edge chars at corners)
        self.set(rect.left(), rect.top(), Cell::new(chars.top_left, color));

        if rect.width > 1 {
            self.set(
                rect.right() - 1,
                rect.top(),
                Cell::new(chars.top_right, color),
            );
        }

        if rect.height > 1 {
            self.set(
                rect.left(),
                rect.bottom() - 1,
                Cell::new(chars.bottom_left, color),
            );
        }

        if rect.width > 1 && rect.height > 1 {
            self.set(
                rect.right() - 1,
                rect.bottom() - 1,
                Cell::new(chars.bottom_right, color),
            );
        }
    }

    fn print_text(&mut self, x: u16, y: u16, text: &str, color: Color) -> u16 {
        self.print_text_clipped(x, y, text, color, self.width())
    }

    fn print_text_clipped(&mut self, x: u16, y: u16, text: &str, color: Color, max_x: u16) -> u16 {
        use unicode_width::UnicodeWidthChar;

        let mut cx = x;
        for c in text.chars() {
            let width = UnicodeWidthChar::width(c).unwrap_or(0);
            if width == 0 {
                continue;
            }

            if cx >= max_x || cx + width as u16 > max_x {
                break;
            }

            self.set(cx, y, Cell::new(c, color));
            cx = cx.saturating_add(width as u16);
        }
        cx
    }
}
