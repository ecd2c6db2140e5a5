//! Code delivery and verification
//!
//! The wizard talks to its backend only through `VerificationService`.
//! `MockVerificationService` simulates it locally: every send "delivers"
//! the same fixed code and only that code is accepted.

use tracing::{info, warn};

use crate::config::settings::VerificationSettings;
use crate::error::{VerifyError, VerifyResult};
use crate::models::{is_valid_phone, mask_phone};

/// Outcome of a successful send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    /// Masked destination number, safe to display or log
    pub masked_phone: String,

    /// Code to reveal to the user; only simulated backends set this
    pub test_code: Option<String>,
}

/// Verdict on a submitted code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    Accepted,
    Rejected,
}

/// Backend used to deliver and check one-time codes
///
/// `App` owns one boxed implementation for as long as it runs.
/// Both calls are synchronous and made from the UI thread, so an
/// implementation must return promptly.
///
/// `Err` means the backend itself failed (unreachable, refused the number).
/// A wrong code is not an error: `verify_code` reports it as
/// [`VerifyOutcome::Rejected`].
pub trait VerificationService {
    /// Deliver a code to `phone`
    ///
    /// Called once per send, when the simulated delivery delay elapses and
    /// not when the user presses the send control. `phone` is read from the
    /// form at that moment, so it may differ from the number that was shown
    /// when sending started; implementations must validate it again.
    ///
    /// On success the receipt carries the masked number, plus the code
    /// itself when the backend wants the UI to reveal it.
    fn send_code(&mut self, phone: &str) -> VerifyResult<SendReceipt>;

    /// Check `code` for `phone`
    ///
    /// Called on submit, after the form fields have passed their presence
    /// checks. `code` is passed exactly as typed, without trimming.
    fn verify_code(&self, phone: &str, code: &str) -> VerifyResult<VerifyOutcome>;
}

/// Local stand-in that accepts a single fixed code
#[derive(Debug, Clone)]
pub struct MockVerificationService {
    accepted_code: String,
    sends: u32,
}

impl MockVerificationService {
    pub fn new(accepted_code: impl Into<String>) -> Self {
        Self {
            accepted_code: accepted_code.into(),
            sends: 0,
        }
    }

    pub fn from_settings(settings: &VerificationSettings) -> Self {
        Self::new(settings.mock_code.clone())
    }

    /// Number of codes "sent" so far
    pub fn sends(&self) -> u32 {
        self.sends
    }
}

impl VerificationService for MockVerificationService {
    fn send_code(&mut self, phone: &str) -> VerifyResult<SendReceipt> {
        let masked_phone = mask_phone(phone);
        if !is_valid_phone(phone) {
            warn!(phone = %masked_phone, "Refusing to send to malformed number");
            return Err(VerifyError::Service(format!(
                "cannot deliver a code to '{}'",
                masked_phone
            )));
        }

        self.sends += 1;
        info!(phone = %masked_phone, sends = self.sends, "Simulated verification code sent");

        Ok(SendReceipt {
            masked_phone,
            test_code: Some(self.accepted_code.clone()),
        })
    }

    fn verify_code(&self, phone: &str, code: &str) -> VerifyResult<VerifyOutcome> {
        if code == self.accepted_code {
            info!(phone = %mask_phone(phone), "Verification code accepted");
            Ok(VerifyOutcome::Accepted)
        } else {
            warn!(phone = %mask_phone(phone), "Verification code rejected");
            Ok(VerifyOutcome::Rejected)
        }
    }
}
