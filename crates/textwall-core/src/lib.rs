#![forbid(unsafe_code)]

//! Core terminal plumbing for textwall.
//!
//! This crate owns the pieces that sit between the raw terminal and the
//! application: geometric primitives, the canonical input event types,
//! and the RAII session guard that enters/restores raw mode.

pub mod event;
pub mod geometry;
pub mod session;

pub use event::{Event, KeyCode, KeyEvent, Modifiers};
pub use geometry::{Rect, Sides};
pub use session::TerminalSession;
