//! Wizard controller
//!
//! Owns the session record (`FormData` plus the current `WizardStep`) and is
//! the only place either changes. Step views read a snapshot through
//! `form()` and write back through `merge_form_data`, `advance` and
//! `retreat`.

use tracing::{info, warn};

use crate::error::{VerifyError, VerifyResult};
use crate::models::{FormData, FormPatch, SessionId, WizardStep};

/// Orchestrates the three-step flow for one session
#[derive(Debug)]
pub struct WizardController {
    session_id: SessionId,
    step: WizardStep,
    form: FormData,
}

impl WizardController {
    /// Start a fresh session at the first step with an empty form
    pub fn new() -> Self {
        let session_id = SessionId::new();
        info!(session = %session_id, "Wizard session started");
        Self {
            session_id,
            step: WizardStep::PersonalInfo,
            form: FormData::new(),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Read-only snapshot of the collected data
    pub fn form(&self) -> &FormData {
        &self.form
    }

    /// Shallow-merge `patch` into the form; omitted fields are untouched
    pub fn merge_form_data(&mut self, patch: FormPatch) {
        self.form.merge(patch);
    }

    /// Move exactly one step forward
    ///
    /// Fails, leaving the state unchanged, at the terminal step.
    pub fn advance(&mut self) -> VerifyResult<WizardStep> {
        match self.step.next() {
            Some(next) => Ok(self.transition_to(next)),
            None => {
                warn!(session = %self.session_id, step = %self.step, "Rejected advance");
                Err(VerifyError::cannot_advance(self.step))
            }
        }
    }

    /// Move exactly one step back
    ///
    /// Only defined from phone verification; fails, leaving the state
    /// unchanged, everywhere else.
    pub fn retreat(&mut self) -> VerifyResult<WizardStep> {
        match self.step.prev() {
            Some(prev) => Ok(self.transition_to(prev)),
            None => {
                warn!(session = %self.session_id, step = %self.step, "Rejected retreat");
                Err(VerifyError::cannot_retreat(self.step))
            }
        }
    }

    /// Discard all session state and start over with a new session
    pub fn restart(&mut self) {
        info!(session = %self.session_id, "Wizard session discarded");
        *self = Self::new();
    }

    fn transition_to(&mut self, step: WizardStep) -> WizardStep {
        info!(session = %self.session_id, from = %self.step, to = %step, "Step transition");
        self.step = step;
        step
    }
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, IdType};

    #[test]
    fn test_new_session_starts_empty() {
        let wizard = WizardController::new();
        assert_eq!(wizard.step(), WizardStep::PersonalInfo);
        assert_eq!(wizard.form(), &FormData::new());
    }

    #[test]
    fn test_advance_walks_the_chain() {
        let mut wizard = WizardController::new();
        assert_eq!(wizard.advance().unwrap(), WizardStep::PhoneVerification);
        assert_eq!(wizard.advance().unwrap(), WizardStep::Success);
        assert_eq!(wizard.step(), WizardStep::Success);
    }

    #[test]
    fn test_advance_then_retreat_keeps_form() {
        let mut wizard = WizardController::new();
        wizard.merge_form_data(
            FormPatch::new()
                .full_name("Li Wei")
                .id_number("X1")
                .birthday("2000-01-01")
                .gender(Gender::Male),
        );
        let before = wizard.form().clone();

        wizard.advance().unwrap();
        assert_eq!(wizard.retreat().unwrap(), WizardStep::PersonalInfo);
        assert_eq!(wizard.form(), &before);
    }

    #[test]
    fn test_retreat_from_first_step_is_rejected() {
        let mut wizard = WizardController::new();
        let err = wizard.retreat().unwrap_err();
        assert!(err.is_invalid_transition());
        assert_eq!(wizard.step(), WizardStep::PersonalInfo);
    }

    #[test]
    fn test_success_is_terminal() {
        let mut wizard = WizardController::new();
        wizard.advance().unwrap();
        wizard.advance().unwrap();

        assert!(wizard.advance().is_err());
        assert_eq!(wizard.step(), WizardStep::Success);
        assert!(wizard.retreat().is_err());
        assert_eq!(wizard.step(), WizardStep::Success);
    }

    #[test]
    fn test_merge_is_non_destructive() {
        let mut wizard = WizardController::new();
        wizard.merge_form_data(FormPatch::new().full_name("Li Wei").id_type(IdType::Passport));
        wizard.merge_form_data(FormPatch::new().phone_number("13812345678"));

        let form = wizard.form();
        assert_eq!(form.full_name, "Li Wei");
        assert_eq!(form.id_type, IdType::Passport);
        assert_eq!(form.phone_number, "13812345678");
    }

    #[test]
    fn test_restart_discards_everything() {
        let mut wizard = WizardController::new();
        let first_session = wizard.session_id();
        wizard.merge_form_data(FormPatch::new().full_name("Li Wei"));
        wizard.advance().unwrap();
        wizard.advance().unwrap();

        wizard.restart();
        assert_eq!(wizard.step(), WizardStep::PersonalInfo);
        assert_eq!(wizard.form(), &FormData::new());
        assert_ne!(wizard.session_id(), first_session);
    }
}
