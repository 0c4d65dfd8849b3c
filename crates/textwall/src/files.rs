#![forbid(unsafe_code)]

//! File open/write for the editor.
//!
//! The editor holds its text as a flat `Vec<char>`; these helpers convert
//! at the filesystem boundary so the rest of the crate never touches
//! `std::fs` directly.

use std::fs;
use std::io;

/// Read a file into the editor's character-vector representation.
///
/// # Errors
///
/// Propagates the underlying I/O error, including not-found and
/// non-UTF-8 content.
pub fn open_file(path: &str) -> io::Result<Vec<char>> {
    let text = fs::read_to_string(path)?;
    Ok(text.chars().collect())
}

/// Write the editor's text back out, replacing the file contents.
///
/// # Errors
///
/// Propagates the underlying I/O error.
pub fn write_file(path: &str, text: &[char]) -> io::Result<()> {
    let contents: String = text.iter().collect();
    fs::write(path, contents)
}
