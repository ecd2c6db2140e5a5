//! Configuration module for Secure Verify
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence
//! - Timer, UI and logging preferences

pub mod paths;
pub mod settings;

pub use paths::VerifyPaths;
pub use settings::Settings;
