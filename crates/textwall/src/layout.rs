#![forbid(unsafe_code)]

//! Screen layout: where the frame sits and where the rain may fall.
//!
//! The single tunable is `pad`, the symmetric side margin in columns.
//! Everything else is derived per frame from the current terminal size,
//! so a resize never leaves stale geometry behind.

use std::ops::Range;

use textwall_core::geometry::{Rect, Sides};

/// Screen regions derived from the terminal size and the side margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pad: u16,
}

impl Layout {
    /// Rows above the frame reserved for the header art.
    pub const HEADER_ROWS: u16 = 4;

    /// Minimum side margin.
    pub const MIN_PAD: u16 = 0;

    #[must_use]
    pub fn new(pad: u16) -> Self {
        Self { pad }
    }

    /// Current side margin in columns.
    #[must_use]
    pub fn pad(&self) -> u16 {
        self.pad
    }

    /// Widest margin that still leaves a one-column viewport.
    ///
    /// The frame needs `2 * pad` margin plus two border columns plus one
    /// interior column, so `pad <= (cols - 3) / 2`.
    #[must_use]
    pub fn max_pad(cols: u16) -> u16 {
        cols.saturating_sub(3) / 2
    }

    /// Narrow the margins by one column (widening the frame).
    pub fn shrink_pad(&mut self) {
        self.pad = self.pad.saturating_sub(1).max(Self::MIN_PAD);
    }

    /// Widen the margins by one column (narrowing the frame).
    ///
    /// Clamped so the viewport keeps at least one interior column.
    pub fn grow_pad(&mut self, cols: u16) {
        self.pad = self.pad.saturating_add(1).min(Self::max_pad(cols));
    }

    /// Re-clamp the margin after a terminal resize.
    pub fn clamp_to(&mut self, cols: u16) {
        self.pad = self.pad.min(Self::max_pad(cols));
    }

    /// The bordered frame rectangle.
    ///
    /// Spans from just below the header art down to the row above the
    /// status line, inset `pad` columns on each side.
    #[must_use]
    pub fn frame_rect(&self, cols: u16, rows: u16) -> Rect {
        Rect::new(
            self.pad,
            Self::HEADER_ROWS,
            cols.saturating_sub(self.pad.saturating_mul(2)),
            rows.saturating_sub(1).saturating_sub(Self::HEADER_ROWS),
        )
    }

    /// The editable interior of the frame (one cell inside the border).
    #[must_use]
    pub fn viewport(&self, cols: u16, rows: u16) -> Rect {
        self.frame_rect(cols, rows).inner(Sides::all(1))
    }

    /// The status line row (the last terminal row).
    #[must_use]
    pub fn status_row(rows: u16) -> u16 {
        rows.saturating_sub(1)
    }

    /// Column ranges outside the frame where rain may spawn.
    ///
    /// The left band is `[1, pad)` and the right band is
    /// `[cols - pad, cols - 1)`; the outermost column on each side stays
    /// dry. Both bands are empty when `pad <= 1`.
    #[must_use]
    pub fn margin_bands(&self, cols: u16) -> (Range<u16>, Range<u16>) {
        let left_end = self.pad.min(cols).max(1);
        let left = 1..left_end;

        let right_end = cols.saturating_sub(1);
        let right_start = cols.saturating_sub(self.pad).max(1).min(right_end);
        let right = right_start..right_end;

        (left, right)
    }
}
