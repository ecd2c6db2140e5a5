//! Core data models for Secure Verify
//!
//! This module contains the session record collected by the wizard and the
//! small closed enums it is built from.

pub mod form;
pub mod identity;
pub mod ids;
pub mod phone;
pub mod step;

pub use form::{FormData, FormField, FormPatch};
pub use identity::{Gender, IdType};
pub use ids::SessionId;
pub use phone::{is_valid_phone, mask_phone};
pub use step::WizardStep;
