#![forbid(unsafe_code)]

//! Rendering kernel for textwall.
//!
//! The pipeline is: draw into a [`buffer::Buffer`] (the back buffer),
//! compute a [`diff::BufferDiff`] against the previously presented frame,
//! and hand both to the [`presenter::Presenter`], which emits the minimal
//! ANSI byte stream. The presenter's `present` call is the only point at
//! which anything becomes visible outside the process.

pub mod ansi;
pub mod buffer;
pub mod cell;
pub mod diff;
pub mod drawing;
pub mod presenter;

pub use buffer::Buffer;
pub use cell::{Cell, Color};
pub use diff::{BufferDiff, ChangeRun};
pub use drawing::{BorderChars, Draw};
pub use presenter::Presenter;
