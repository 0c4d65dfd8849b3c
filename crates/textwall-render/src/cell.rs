#![forbid(unsafe_code)]

//! Cell and palette types.
//!
//! A cell is a single terminal position: one character plus a palette
//! color. The palette is a closed enum; every color the application ever
//! paints with has a variant here, which keeps cells `Copy` and makes
//! diffing a plain equality test.

/// The application color palette.
///
/// Maps to 256-color SGR in the presenter. `Info` additionally renders
/// bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Terminal default foreground.
    #[default]
    Default,
    /// Frame border and header art (soft red).
    Border,
    /// Bold white info text.
    Info,
    /// Status line and prompts (white).
    Status,
    /// Editor text (terminal default).
    Text,
    /// Rain trail, head (brightest green).
    RainBright,
    /// Rain trail, upper body.
    RainMid,
    /// Rain trail, fading.
    RainDim,
    /// Rain trail, tail (darkest green).
    RainDimmer,
}

impl Color {
    /// 256-color palette index, or `None` for the terminal default.
    #[must_use]
    pub const fn index(self) -> Option<u8> {
        match self {
            Color::Default | Color::Text => None,
            Color::Border => Some(203),
            Color::Info | Color::Status => Some(15),
            Color::RainBright => Some(120),
            Color::RainMid => Some(84),
            Color::RainDim => Some(40),
            Color::RainDimmer => Some(28),
        }
    }

    /// Whether this color renders bold.
    #[must_use]
    pub const fn bold(self) -> bool {
        matches!(self, Color::Info)
    }
}

/// A single terminal cell: character plus palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character occupying the cell.
    pub ch: char,
    /// The foreground color.
    pub color: Color,
}

impl Cell {
    /// The empty cell: a space in the default color.
    pub const EMPTY: Cell = Cell {
        ch: ' ',
        color: Color::Default,
    };

    /// Create a cell with the default color.
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        Self {
            ch,
            color: Color::Default,
        }
    }

    /// Create a cell with a specific color.
    #[must_use]
    pub const fn new(ch: char, color: Color) -> Self {
        Self { ch, color }
    }

    /// Whether the cell holds no visible content.
    ///
    /// Color is deliberately ignored: a colored space is still blank.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.ch == ' '
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}
