#![forbid(unsafe_code)]

//! textwall: a falling-character rain animation sharing the terminal with
//! a minimal modal text editor.
//!
//! The binary wires these modules into a [`textwall_runtime::Program`]:
//! [`app::App`] is the model, [`chrome`] composes each frame, [`rain`]
//! animates the background, and [`editor`] holds the modal state machine.

pub mod app;
pub mod chrome;
pub mod cli;
pub mod editor;
pub mod files;
pub mod layout;
pub mod rain;

pub use app::App;
