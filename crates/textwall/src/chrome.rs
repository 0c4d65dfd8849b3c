#![forbid(unsafe_code)]

//! Frame composition.
//!
//! [`compose`] paints one complete frame into an already-cleared buffer:
//! header art, frame border, info lines, status line, the prompt when a
//! file name is being typed, the editor text, and finally the rain. The
//! rain goes last so its blank-cell test sees everything else already in
//! place and can never overwrite chrome or text.

use textwall_core::geometry::Rect;
use textwall_render::buffer::Buffer;
use textwall_render::cell::{Cell, Color};
use textwall_render::drawing::{BorderChars, Draw};

use crate::editor::{EditorState, Mode};
use crate::layout::Layout;
use crate::rain::RainField;

/// Banner above the frame. The last line ends in a literal backslash.
pub const HEADER_ART: [&str; 4] = [
    "         ____________________         ",
    r"     ___/_/_/            \_\_\___     ",
    r" ___/_/_/_/_/  welcome!  \_\_\_\_\___ ",
    r"/_/_/_/_/_/_/____________\_\_\_\_\_\_\",
];

const INFO_COL: u16 = 5;
const PROMPT_ROW: u16 = 15;

/// Starting column for a centered string.
fn centered_x(width: u16, text: &str) -> u16 {
    let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    width.saturating_sub(len) / 2
}

/// Paint one frame; returns the cursor position to show, if any.
pub fn compose(
    buf: &mut Buffer,
    layout: &Layout,
    editor: &EditorState,
    rain: &RainField,
    cwd: &str,
    home: &str,
) -> Option<(u16, u16)> {
    let width = buf.width();
    let height = buf.height();

    for (i, line) in HEADER_ART.iter().enumerate() {
        buf.print_text(centered_x(width, line), i as u16, line, Color::Border);
    }

    let frame = layout.frame_rect(width, height);
    buf.draw_border(frame, BorderChars::SQUARE, Color::Border);

    buf.print_text(INFO_COL, 6, &format!("cwd:  {cwd}"), Color::Info);
    buf.print_text(width.saturating_sub(14), 6, "q to quit", Color::Info);
    buf.print_text(INFO_COL, 7, &format!("home: {home}"), Color::Info);

    let status = format!("[{}] {}", editor.mode_label(), editor.status());
    buf.print_text(1, Layout::status_row(height), &status, Color::Status);

    let prompt_cursor = editor.prompt().map(|prompt| {
        let prompt_x = centered_x(width, prompt);
        buf.print_text(prompt_x, PROMPT_ROW, prompt, Color::Status);
        let input_x = prompt_x.saturating_add(2);
        let end_x = buf.print_text(input_x, PROMPT_ROW + 1, editor.input(), Color::Status);
        (end_x, PROMPT_ROW + 1)
    });

    let viewport = layout.viewport(width, height);
    let text_end = overlay_text(buf, viewport, editor.text());

    rain.paint(buf);

    let cursor = match editor.mode() {
        Mode::Input => prompt_cursor,
        Mode::Insert => Some(text_end),
        Mode::Command => None,
    };
    cursor.map(|(x, y)| {
        (
            x.min(width.saturating_sub(1)),
            y.min(height.saturating_sub(1)),
        )
    })
}

/// Flow the text into the viewport, wrapping at its right edge.
///
/// Rows below the viewport are drawn over whatever is there, matching
/// the overflow behavior of the frame this reproduces; `Buffer::set`
/// clips at the screen edge. Returns the position after the last
/// character.
fn overlay_text(buf: &mut Buffer, viewport: Rect, text: &[char]) -> (u16, u16) {
    let mut x = viewport.left();
    let mut y = viewport.top();
    if viewport.is_empty() {
        return (x, y);
    }

    for &c in text {
        if c == '\n' {
            x = viewport.left();
            y = y.saturating_add(1);
            continue;
        }
        if x >= viewport.right() {
            x = viewport.left();
            y = y.saturating_add(1);
        }
        buf.set(x, y, Cell::new(c, Color::Text));
        x = x.saturating_add(1);
    }
    (x, y)
}
