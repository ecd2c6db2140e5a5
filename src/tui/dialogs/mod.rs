//! Dialog modules for the TUI
//!
//! Overlays drawn on top of the current step

pub mod help;
