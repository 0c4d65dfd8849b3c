#![forbid(unsafe_code)]

//! Program runtime for textwall.
//!
//! One render thread owns the buffers and the presenter; an input thread
//! and a tick thread feed it events over a channel. See [`program`].

pub mod program;

pub use program::{Cmd, Frame, Model, Program, TICK_INTERVAL};
