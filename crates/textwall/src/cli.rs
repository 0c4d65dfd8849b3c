#![forbid(unsafe_code)]

//! Command-line interface.
//!
//! One required positional argument selects the side-margin size class.
//! Parsing is done by hand over `std::env::args()`; the surface is small
//! enough that an argument-parsing crate would outweigh it.

use std::process::ExitCode;

const USAGE: &str = "usage: textwall <size>

Matrix rain with a minimal modal editor on top.

arguments:
  <size>    side margin width: 's' for wide margins (cols/4),
            'm' for medium margins (cols/8), anything else for
            near-full-width (1 column)

options:
  -h, --help    print this help and exit

environment:
  TEXTWALL_LOG  when set, write tracing output at the given filter
                level to ./textwall.log (e.g. TEXTWALL_LOG=debug)";

/// How much horizontal margin the frame leaves on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// Wide margins: a quarter of the terminal width on each side.
    Small,
    /// Medium margins: an eighth of the terminal width on each side.
    Medium,
    /// Near-full width: one column on each side.
    Full,
}

impl SizeClass {
    /// Map an argument string onto a size class.
    ///
    /// Unrecognized strings fall back to [`SizeClass::Full`]; only the
    /// absence of the argument is an error.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "s" => SizeClass::Small,
            "m" => SizeClass::Medium,
            _ => SizeClass::Full,
        }
    }

    /// Resolve the class to an initial pad for a terminal of `cols` columns.
    #[must_use]
    pub fn initial_pad(self, cols: u16) -> u16 {
        match self {
            SizeClass::Small => cols / 4,
            SizeClass::Medium => cols / 8,
            SizeClass::Full => 1,
        }
    }
}

/// Parsed command-line options.
#[derive(Debug, Clone, Copy)]
pub struct Opts {
    pub size_class: SizeClass,
}

impl Opts {
    /// Parse `std::env::args()`.
    ///
    /// # Errors
    ///
    /// Returns an exit code when the process should terminate instead of
    /// running: 0 after printing help, 1 on a missing argument.
    pub fn parse() -> Result<Self, ExitCode> {
        Self::parse_from(std::env::args().skip(1))
    }

    fn parse_from<I>(args: I) -> Result<Self, ExitCode>
    where
        I: IntoIterator<Item = String>,
    {
        let mut size_class = None;

        for arg in args {
            match arg.as_str() {
                "-h" | "--help" => {
                    println!("{USAGE}");
                    return Err(ExitCode::SUCCESS);
                }
                other => {
                    if size_class.is_none() {
                        size_class = Some(SizeClass::from_arg(other));
                    }
                }
            }
        }

        match size_class {
            Some(size_class) => Ok(Self { size_class }),
            None => {
                eprintln!("textwall: missing required <size> argument\n\n{USAGE}");
                Err(ExitCode::FAILURE)
            }
        }
    }
}
