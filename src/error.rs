//! Custom error types for Secure Verify
//!
//! This module defines the application error hierarchy using thiserror.
//! Field validation failures are deliberately not part of this enum; they
//! live in `wizard::validator` and never leave the step that raised them.

use thiserror::Error;

use crate::models::WizardStep;

/// The main error type for Secure Verify operations
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A step transition that the wizard state machine does not define
    #[error("Cannot {action} from step '{from}'")]
    InvalidTransition {
        from: WizardStep,
        action: &'static str,
    },

    /// Code delivery or verification backend failures
    #[error("Verification service error: {0}")]
    Service(String),
}

impl VerifyError {
    /// Create an error for an `advance` past the terminal step
    pub fn cannot_advance(from: WizardStep) -> Self {
        Self::InvalidTransition {
            from,
            action: "advance",
        }
    }

    /// Create an error for a `retreat` without a previous step
    pub fn cannot_retreat(from: WizardStep) -> Self {
        Self::InvalidTransition {
            from,
            action: "go back",
        }
    }

    /// Check if this is a rejected step transition
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}

impl From<std::io::Error> for VerifyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Secure Verify operations
pub type VerifyResult<T> = Result<T, VerifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VerifyError::Config("bad mock code".into());
        assert_eq!(err.to_string(), "Configuration error: bad mock code");
    }

    #[test]
    fn test_invalid_transition_error() {
        let err = VerifyError::cannot_advance(WizardStep::Success);
        assert_eq!(err.to_string(), "Cannot advance from step 'Done'");
        assert!(err.is_invalid_transition());

        let err = VerifyError::cannot_retreat(WizardStep::PersonalInfo);
        assert_eq!(err.to_string(), "Cannot go back from step 'Personal info'");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VerifyError = io_err.into();
        assert!(matches!(err, VerifyError::Io(_)));
        assert!(!err.is_invalid_transition());
    }
}
