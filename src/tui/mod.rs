//! Terminal User Interface module
//!
//! The wizard front end built on ratatui. Each step has a view under
//! `steps`; `views` draws the frame around it and `dialogs` the overlays.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Step views
pub mod steps;

// Frame chrome
pub mod views;

// Widgets
pub mod widgets;

// Overlays
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
