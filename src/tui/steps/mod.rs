//! Step views
//!
//! Each wizard step has its own view with local state (inputs, focus,
//! errors, timers). A view is created when its step is mounted and torn
//! down when the wizard leaves the step; only the controller's form
//! survives the transition.

pub mod personal_info;
pub mod phone_verification;
pub mod success;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::Settings;
use crate::models::{FormData, WizardStep};
use crate::tui::widgets::input::TextInput;

pub use personal_info::PersonalInfoView;
pub use phone_verification::PhoneVerificationView;
pub use success::SuccessView;

/// The mounted view for the current step
#[derive(Debug)]
pub enum StepView {
    PersonalInfo(PersonalInfoView),
    PhoneVerification(PhoneVerificationView),
    Success(SuccessView),
}

impl StepView {
    /// Create the view for `step` with fresh local state
    pub fn mount(step: WizardStep, form: &FormData, settings: &Settings) -> Self {
        match step {
            WizardStep::PersonalInfo => Self::PersonalInfo(PersonalInfoView::new(form)),
            WizardStep::PhoneVerification => {
                Self::PhoneVerification(PhoneVerificationView::new(form, settings))
            }
            WizardStep::Success => Self::Success(SuccessView::new(form)),
        }
    }

    pub fn step(&self) -> WizardStep {
        match self {
            Self::PersonalInfo(_) => WizardStep::PersonalInfo,
            Self::PhoneVerification(_) => WizardStep::PhoneVerification,
            Self::Success(_) => WizardStep::Success,
        }
    }

    /// Release anything the view scheduled
    pub fn teardown(&mut self) {
        if let Self::PhoneVerification(view) = self {
            view.teardown();
        }
    }
}

/// Result of feeding a key to a text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputEdit {
    /// Content changed and must be merged into the form
    Changed,
    /// Only the cursor moved
    Moved,
    Ignored,
}

/// Apply a key to a text input
pub(crate) fn edit_input(input: &mut TextInput, key: KeyEvent) -> InputEdit {
    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    let changed = match key.code {
        KeyCode::Char(c) if plain => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_start();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => return InputEdit::Ignored,
    };

    if changed {
        InputEdit::Changed
    } else {
        InputEdit::Moved
    }
}

/// Draw a field's error line, aligned under the input value
pub(crate) fn render_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let line = Line::from(vec![
            Span::raw(" ".repeat(14)),
            Span::styled(message.to_string(), Style::default().fg(Color::Red)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardController;

    #[test]
    fn test_mount_matches_step() {
        let settings = Settings::default();
        let form = FormData::new();
        for step in WizardStep::ALL {
            assert_eq!(StepView::mount(step, &form, &settings).step(), step);
        }
    }

    #[test]
    fn test_edit_input_classifies_keys() {
        let mut input = TextInput::new().max_len(2);
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(edit_input(&mut input, key(KeyCode::Char('1'))), InputEdit::Changed);
        assert_eq!(edit_input(&mut input, key(KeyCode::Left)), InputEdit::Moved);
        assert_eq!(edit_input(&mut input, key(KeyCode::F(5))), InputEdit::Ignored);
        assert_eq!(
            edit_input(&mut input, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            InputEdit::Ignored
        );
        assert_eq!(input.value(), "1");
    }

    #[test]
    fn test_teardown_cancels_phone_timer() {
        let settings = Settings::default();
        let mut wizard = WizardController::new();
        wizard.advance().unwrap();
        wizard.merge_form_data(crate::models::FormPatch::new().phone_number("12345678901"));

        let mut view = StepView::mount(wizard.step(), wizard.form(), &settings);
        if let StepView::PhoneVerification(phone) = &mut view {
            assert!(phone.send_code(wizard.form(), std::time::Instant::now()));
            assert!(phone.timer.has_pending_timers());
        }
        view.teardown();
        if let StepView::PhoneVerification(phone) = &view {
            assert!(!phone.timer.has_pending_timers());
        }
    }
}
