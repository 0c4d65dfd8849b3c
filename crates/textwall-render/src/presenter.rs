#![forbid(unsafe_code)]

//! Presenter: state-tracked ANSI emission.
//!
//! The Presenter transforms buffer diffs into minimal terminal output by
//! tracking the current terminal state and only emitting sequences when
//! something actually changes.
//!
//! # Design Principles
//!
//! - **State tracking**: Track current color and cursor to avoid
//!   redundant output
//! - **Run grouping**: Use ChangeRuns to minimize cursor positioning
//! - **Single write**: Buffer all output and flush once per frame
//! - **Synchronized output**: Wrap frames in DEC 2026 markers to prevent
//!   tearing on supported terminals

use std::io::{self, BufWriter, Write};

use crate::ansi;
use crate::buffer::Buffer;
use crate::cell::Color;
use crate::diff::BufferDiff;

/// Size of the internal write buffer (64KB).
const BUFFER_CAPACITY: usize = 64 * 1024;

/// State-tracked ANSI presenter.
pub struct Presenter<W: Write> {
    /// Buffered writer for efficient output.
    writer: BufWriter<W>,
    /// Current color state (None = unknown/reset).
    current_color: Option<Color>,
    /// Current cursor X position (0-indexed). None = unknown.
    cursor_x: Option<u16>,
    /// Current cursor Y position (0-indexed). None = unknown.
    cursor_y: Option<u16>,
}

impl<W: Write> Presenter<W> {
    /// Create a new presenter over the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            current_color: None,
            cursor_x: None,
            cursor_y: None,
        }
    }

    /// Present a frame using the given buffer and diff.
    ///
    /// This is the single externally visible operation of the render
    /// pipeline. It:
    /// 1. Begins synchronized output
    /// 2. Emits changed cells, one cursor move per run
    /// 3. Resets the color state
    /// 4. Ends synchronized output
    /// 5. Flushes all buffered output at once
    pub fn present(&mut self, buffer: &Buffer, diff: &BufferDiff) -> io::Result<()> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "present",
            width = buffer.width(),
            height = buffer.height(),
            changes = diff.len()
        );
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        ansi::sync_begin(&mut self.writer)?;

        for run in diff.runs() {
            // Single cursor move per run
            self.move_cursor_to(run.x0, run.y)?;

            // Cursor advances naturally after each character
            for x in run.x0..=run.x1 {
                let cell = buffer.get_unchecked(x, run.y);
                self.emit_color(cell.color)?;
                self.emit_char(cell.ch)?;
                if let Some(cx) = self.cursor_x {
                    self.cursor_x = Some(cx.saturating_add(1));
                }
            }
        }

        // Clean color state for whatever writes next
        ansi::sgr_reset(&mut self.writer)?;
        self.current_color = None;

        ansi::sync_end(&mut self.writer)?;
        self.writer.flush()
    }

    /// Emit the color change if it differs from the tracked state.
    fn emit_color(&mut self, color: Color) -> io::Result<()> {
        if self.current_color == Some(color) {
            return Ok(());
        }
        ansi::sgr_color(&mut self.writer, color)?;
        self.current_color = Some(color);
        Ok(())
    }

    fn emit_char(&mut self, ch: char) -> io::Result<()> {
        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf);
        self.writer.write_all(encoded.as_bytes())
    }

    /// Move cursor to the specified position, skipping the move when the
    /// cursor is already there.
    fn move_cursor_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        if self.cursor_x == Some(x) && self.cursor_y == Some(y) {
            return Ok(());
        }

        ansi::cup(&mut self.writer, y, x)?;
        self.cursor_x = Some(x);
        self.cursor_y = Some(y);
        Ok(())
    }

    /// Clear the entire screen and home the cursor.
    pub fn clear_screen(&mut self) -> io::Result<()> {
        ansi::erase_display(&mut self.writer)?;
        ansi::cup(&mut self.writer, 0, 0)?;
        self.cursor_x = Some(0);
        self.cursor_y = Some(0);
        self.writer.flush()
    }

    /// Hide the cursor.
    pub fn hide_cursor(&mut self) -> io::Result<()> {
        ansi::cursor_hide(&mut self.writer)?;
        self.writer.flush()
    }

    /// Show the cursor.
    pub fn show_cursor(&mut self) -> io::Result<()> {
        ansi::cursor_show(&mut self.writer)?;
        self.writer.flush()
    }

    /// Position the (visible) cursor at the specified coordinates.
    pub fn position_cursor(&mut self, x: u16, y: u16) -> io::Result<()> {
        self.move_cursor_to(x, y)?;
        self.writer.flush()
    }

    /// Reset the tracked state.
    ///
    /// Used after resize, when the real terminal state is unknown.
    pub fn reset(&mut self) {
        self.current_color = None;
        self.cursor_x = None;
        self.cursor_y = None;
    }

    /// Get the inner writer (consuming the presenter).
    ///
    /// Flushes any buffered data before returning the writer.
    pub fn into_inner(self) -> Result<W, io::Error> {
        self.writer
            .into_inner()
            .map_err(|e| io::Error::other(e.to_string()))
    }
}
