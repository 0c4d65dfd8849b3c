#![forbid(unsafe_code)]

//! ANSI escape sequence generation helpers.
//!
//! Pure byte-generation functions for the VT control sequences the
//! presenter emits. No state tracking here; the presenter layers that on
//! top.
//!
//! # Sequence Reference
//!
//! | Category | Sequence | Description |
//! |----------|----------|-------------|
//! | CSI | `ESC [ n m` | SGR (Select Graphic Rendition) |
//! | CSI | `ESC [ row ; col H` | CUP (Cursor Position, 1-indexed) |
//! | CSI | `ESC [ n J` | ED (Erase Display) |
//! | CSI | `ESC [ ? 25 h/l` | Cursor show/hide |
//! | CSI | `ESC [ ? 2026 h/l` | Synchronized Output (DEC) |

use std::io::{self, Write};

use crate::cell::Color;

// =============================================================================
// SGR (Select Graphic Rendition)
// =============================================================================

/// SGR reset: `CSI 0 m`
pub const SGR_RESET: &[u8] = b"\x1b[0m";

/// SGR bold: `CSI 1 m`
pub const SGR_BOLD: &[u8] = b"\x1b[1m";

/// Write SGR reset sequence.
#[inline]
pub fn sgr_reset<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(SGR_RESET)
}

/// Write SGR bold.
#[inline]
pub fn sgr_bold<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(SGR_BOLD)
}

/// Write SGR sequence for 256-color foreground: `CSI 38;5;n m`
pub fn sgr_fg_256<W: Write>(w: &mut W, index: u8) -> io::Result<()> {
    write!(w, "\x1b[38;5;{index}m")
}

/// Write the full SGR state for a palette color.
///
/// Emits reset first so the previous color's attributes never leak, then
/// the 256-color index (if any) and bold (if the color calls for it).
pub fn sgr_color<W: Write>(w: &mut W, color: Color) -> io::Result<()> {
    sgr_reset(w)?;
    if let Some(index) = color.index() {
        sgr_fg_256(w, index)?;
    }
    if color.bold() {
        sgr_bold(w)?;
    }
    Ok(())
}

// =============================================================================
// Cursor Positioning
// =============================================================================

/// CUP (Cursor Position): `CSI row ; col H` (1-indexed)
///
/// Row and col are 0-indexed input, converted to 1-indexed for ANSI.
pub fn cup<W: Write>(w: &mut W, row: u16, col: u16) -> io::Result<()> {
    write!(
        w,
        "\x1b[{};{}H",
        row.saturating_add(1),
        col.saturating_add(1)
    )
}

/// Hide cursor: `CSI ? 25 l`
pub const CURSOR_HIDE: &[u8] = b"\x1b[?25l";

/// Show cursor: `CSI ? 25 h`
pub const CURSOR_SHOW: &[u8] = b"\x1b[?25h";

/// Write hide cursor.
#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(CURSOR_HIDE)
}

/// Write show cursor.
#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(CURSOR_SHOW)
}

// =============================================================================
// Erase Operations
// =============================================================================

/// Erase entire display: `CSI 2 J`
pub const ERASE_DISPLAY: &[u8] = b"\x1b[2J";

/// Write erase display.
#[inline]
pub fn erase_display<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(ERASE_DISPLAY)
}

// =============================================================================
// Synchronized Output (DEC 2026)
// =============================================================================

/// Begin synchronized output: `CSI ? 2026 h`
pub const SYNC_BEGIN: &[u8] = b"\x1b[?2026h";

/// End synchronized output: `CSI ? 2026 l`
pub const SYNC_END: &[u8] = b"\x1b[?2026l";

/// Write synchronized output begin.
#[inline]
pub fn sync_begin<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(SYNC_BEGIN)
}

/// Write synchronized output end.
#[inline]
pub fn sync_end<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(SYNC_END)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> Vec<u8> {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        out
    }

    #[test]
    fn sgr_reset_bytes() {
        assert_eq!(collect(sgr_reset), b"\x1b[0m");
    }

    #[test]
    fn sgr_bold_bytes() {
        assert_eq!(collect(sgr_bold), b"\x1b[1m");
    }

    #[test]
    fn sgr_fg_256_bytes() {
        assert_eq!(collect(|w| sgr_fg_256(w, 120)), b"\x1b[38;5;120m");
        assert_eq!(collect(|w| sgr_fg_256(w, 0)), b"\x1b[38;5;0m");
    }

    #[test]
    fn sgr_color_default_resets_only() {
        assert_eq!(collect(|w| sgr_color(w, Color::Default)), b"\x1b[0m");
    }

    #[test]
    fn sgr_color_info_is_white_and_bold() {
        assert_eq!(
            collect(|w| sgr_color(w, Color::Info)),
            b"\x1b[0m\x1b[38;5;15m\x1b[1m"
        );
    }

    #[test]
    fn sgr_color_rain_bright() {
        assert_eq!(
            collect(|w| sgr_color(w, Color::RainBright)),
            b"\x1b[0m\x1b[38;5;120m"
        );
    }

    #[test]
    fn cup_is_one_indexed() {
        assert_eq!(collect(|w| cup(w, 0, 0)), b"\x1b[1;1H");
        assert_eq!(collect(|w| cup(w, 5, 10)), b"\x1b[6;11H");
    }

    #[test]
    fn cup_saturates_at_u16_max() {
        assert_eq!(
            collect(|w| cup(w, u16::MAX, u16::MAX)),
            format!("\x1b[{};{}H", u16::MAX, u16::MAX).as_bytes()
        );
    }

    #[test]
    fn cursor_visibility_bytes() {
        assert_eq!(collect(cursor_hide), b"\x1b[?25l");
        assert_eq!(collect(cursor_show), b"\x1b[?25h");
    }

    #[test]
    fn erase_display_bytes() {
        assert_eq!(collect(erase_display), b"\x1b[2J");
    }

    #[test]
    fn sync_marker_bytes() {
        assert_eq!(collect(sync_begin), b"\x1b[?2026h");
        assert_eq!(collect(sync_end), b"\x1b[?2026l");
    }
}
