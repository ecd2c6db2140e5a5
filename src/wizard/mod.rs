//! Verification wizard core
//!
//! UI-independent pieces of the flow: the step state machine, field
//! validation, and the resend cooldown with its timer handles.

pub mod controller;
pub mod countdown;
pub mod schedule;
pub mod validator;

pub use controller::WizardController;
pub use countdown::{CooldownPhase, CountdownTimer, TimerEvent};
pub use validator::{FieldErrors, ValidationError};
