//! Service layer for Secure Verify
//!
//! Backends the wizard depends on, kept behind traits so a real
//! implementation can replace the local simulation.

pub mod verification;

pub use verification::{MockVerificationService, SendReceipt, VerificationService, VerifyOutcome};
