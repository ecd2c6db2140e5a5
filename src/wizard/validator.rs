//! Field validation for the wizard steps
//!
//! Validation failures are ordinary values, never faults. The personal info
//! step gets a field -> message map; the phone step gets one typed error per
//! action, because "send code" and "submit" fill separate error slots.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::error::VerifyResult;
use crate::models::{is_valid_phone, FormData, FormField};
use crate::services::verification::{VerificationService, VerifyOutcome};

pub const MSG_FULL_NAME_REQUIRED: &str = "Please enter your full name";
pub const MSG_ID_NUMBER_REQUIRED: &str = "Please enter your ID number";
pub const MSG_BIRTHDAY_REQUIRED: &str = "Please select your date of birth";
pub const MSG_GENDER_REQUIRED: &str = "Please select your gender";
pub const MSG_PHONE_FORMAT: &str = "Please enter a valid 11-digit phone number";
pub const MSG_PHONE_REQUIRED: &str = "Please enter your phone number";
pub const MSG_CODE_REQUIRED: &str = "Please enter the verification code";
pub const MSG_CODE_INCORRECT: &str = "Incorrect verification code, please try again";

/// Field name -> human readable message; empty means valid
pub type FieldErrors = BTreeMap<FormField, String>;

/// A single validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty
    #[error("{message}")]
    MissingField {
        field: FormField,
        message: &'static str,
    },

    /// The phone number is not 11 digits
    #[error("{message}")]
    FormatMismatch {
        field: FormField,
        message: &'static str,
    },

    /// The code does not match the accepted one
    #[error("{message}")]
    SentinelMismatch {
        field: FormField,
        message: &'static str,
    },
}

impl ValidationError {
    /// The field the message should be shown under
    pub fn field(&self) -> FormField {
        match self {
            Self::MissingField { field, .. }
            | Self::FormatMismatch { field, .. }
            | Self::SentinelMismatch { field, .. } => *field,
        }
    }

    fn missing(field: FormField, message: &'static str) -> Self {
        Self::MissingField { field, message }
    }
}

/// Validate the personal info step
///
/// Presence checks only: names and ID numbers are trimmed, the birthday
/// is accepted as any non-empty string, gender must be chosen.
pub fn validate_personal_info(form: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.full_name.trim().is_empty() {
        errors.insert(FormField::FullName, MSG_FULL_NAME_REQUIRED.to_string());
    }
    if form.id_number.trim().is_empty() {
        errors.insert(FormField::IdNumber, MSG_ID_NUMBER_REQUIRED.to_string());
    }
    if form.birthday.is_empty() {
        errors.insert(FormField::Birthday, MSG_BIRTHDAY_REQUIRED.to_string());
    }
    if form.gender.is_none() {
        errors.insert(FormField::Gender, MSG_GENDER_REQUIRED.to_string());
    }

    errors
}

/// Check the phone number before sending a code
pub fn check_phone_format(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(ValidationError::FormatMismatch {
            field: FormField::PhoneNumber,
            message: MSG_PHONE_FORMAT,
        })
    }
}

/// Presence checks run on submit, before the code is verified
pub fn check_submission_fields(form: &FormData) -> Result<(), ValidationError> {
    if form.phone_number.is_empty() {
        return Err(ValidationError::missing(
            FormField::PhoneNumber,
            MSG_PHONE_REQUIRED,
        ));
    }
    if form.verification_code.is_empty() {
        return Err(ValidationError::missing(
            FormField::VerificationCode,
            MSG_CODE_REQUIRED,
        ));
    }
    Ok(())
}

/// Full submit check: presence, then the code against the service
///
/// The outer `Result` carries service faults; the inner one is the
/// validation verdict.
pub fn check_submission(
    form: &FormData,
    service: &dyn VerificationService,
) -> VerifyResult<Result<(), ValidationError>> {
    if let Err(e) = check_submission_fields(form) {
        return Ok(Err(e));
    }

    match service.verify_code(&form.phone_number, &form.verification_code)? {
        VerifyOutcome::Accepted => Ok(Ok(())),
        VerifyOutcome::Rejected => Ok(Err(ValidationError::SentinelMismatch {
            field: FormField::VerificationCode,
            message: MSG_CODE_INCORRECT,
        })),
    }
}
