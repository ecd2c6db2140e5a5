//! Secure Verify - terminal identity verification wizard
//!
//! A three-step flow: personal information, phone verification with a
//! simulated one-time code, and a masked summary on success.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: tracing subscriber setup
//! - `models`: Form data, identity enums, the step enum and phone helpers
//! - `services`: The verification service seam and its mock
//! - `wizard`: Controller, validation rules and the resend cooldown
//! - `tui`: The ratatui front end
//!
//! # Example
//!
//! ```rust,ignore
//! use secure_verify::config::{Settings, VerifyPaths};
//!
//! let paths = VerifyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! secure_verify::tui::run_tui(&settings)?;
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;
pub mod wizard;

pub use error::{VerifyError, VerifyResult};
