//! Phone verification step
//!
//! Sends a (simulated) one-time code to the phone number and checks the code
//! the user types back. The step owns the resend cooldown timer; it is
//! cancelled when the step is torn down.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, warn};

use super::{edit_input, render_error, InputEdit};
use crate::config::Settings;
use crate::models::phone::{CODE_DIGITS, PHONE_DIGITS};
use crate::models::{FormData, FormField, FormPatch};
use crate::services::VerificationService;
use crate::tui::widgets::input::TextInput;
use crate::tui::widgets::notification::Notification;
use crate::wizard::validator::{check_phone_format, check_submission};
use crate::wizard::{CountdownTimer, TimerEvent, WizardController};

/// Which control is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhoneControl {
    #[default]
    PhoneNumber,
    VerificationCode,
    SendCode,
}

impl PhoneControl {
    pub fn next(self) -> Self {
        match self {
            Self::PhoneNumber => Self::VerificationCode,
            Self::VerificationCode => Self::SendCode,
            Self::SendCode => Self::PhoneNumber,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::PhoneNumber => Self::SendCode,
            Self::VerificationCode => Self::PhoneNumber,
            Self::SendCode => Self::VerificationCode,
        }
    }
}

/// View-local state of the phone verification step
#[derive(Debug)]
pub struct PhoneVerificationView {
    pub focused: PhoneControl,
    pub phone_input: TextInput,
    pub code_input: TextInput,
    pub timer: CountdownTimer,
    /// Error slot filled by "send code" and by a missing phone on submit
    pub phone_error: Option<String>,
    /// Error slot filled by submit
    pub code_error: Option<String>,
    notification_duration: Duration,
}

impl PhoneVerificationView {
    /// Mount the step with a fresh, idle timer
    pub fn new(form: &FormData, settings: &Settings) -> Self {
        let mut view = Self {
            focused: PhoneControl::default(),
            phone_input: TextInput::new()
                .label(FormField::PhoneNumber.label())
                .placeholder("11-digit mobile number")
                .max_len(PHONE_DIGITS)
                .content(&form.phone_number),
            code_input: TextInput::new()
                .label(FormField::VerificationCode.label())
                .placeholder("6-digit code")
                .max_len(CODE_DIGITS)
                .content(&form.verification_code),
            timer: CountdownTimer::from_settings(&settings.verification),
            phone_error: None,
            code_error: None,
            notification_duration: Duration::from_secs(settings.ui.notification_secs),
        };
        view.update_focus();
        view
    }

    pub fn set_focus(&mut self, control: PhoneControl) {
        self.focused = control;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.phone_input.focused = self.focused == PhoneControl::PhoneNumber;
        self.code_input.focused = self.focused == PhoneControl::VerificationCode;
    }

    /// Trigger "send code"
    ///
    /// Does nothing while the control is locked. Returns `true` if the
    /// sending phase started.
    pub fn send_code(&mut self, form: &FormData, now: Instant) -> bool {
        if self.timer.is_locked() {
            return false;
        }
        if let Err(e) = check_phone_format(&form.phone_number) {
            debug!("Send code blocked by phone format");
            self.phone_error = Some(e.to_string());
            return false;
        }
        self.phone_error = None;
        self.timer.start(now)
    }

    /// Drive the cooldown timer; returns the one-time code reveal when the
    /// simulated delivery completes
    pub fn on_tick(
        &mut self,
        form: &FormData,
        service: &mut dyn VerificationService,
        now: Instant,
    ) -> Option<Notification> {
        let mut reveal = None;
        for event in self.timer.poll(now) {
            match event {
                TimerEvent::Sent => {
                    reveal = Some(match service.send_code(&form.phone_number) {
                        Ok(receipt) => {
                            let message = match receipt.test_code {
                                Some(code) => format!(
                                    "Simulated SMS sent to {}. Test verification code: {}",
                                    receipt.masked_phone, code
                                ),
                                None => format!("Verification code sent to {}", receipt.masked_phone),
                            };
                            Notification::info(message)
                        }
                        Err(e) => {
                            warn!(error = %e, "Sending verification code failed");
                            self.timer.cancel();
                            Notification::error(e.to_string())
                        }
                    }
                    .with_duration(self.notification_duration)
                    .shown_at(now));
                }
                TimerEvent::Tick(remaining) => debug!(remaining, "Cooldown tick"),
                TimerEvent::Finished => debug!("Cooldown finished"),
            }
        }
        reveal
    }

    /// Validate and verify; advances the wizard on success
    ///
    /// Returns `true` if the wizard moved on. On failure the typed code is
    /// kept so the user can correct it.
    pub fn submit(
        &mut self,
        wizard: &mut WizardController,
        service: &mut dyn VerificationService,
    ) -> bool {
        self.code_error = None;

        match check_submission(wizard.form(), service) {
            Ok(Ok(())) => wizard.advance().is_ok(),
            Ok(Err(e)) => {
                match e.field() {
                    FormField::PhoneNumber => {
                        self.phone_error = Some(e.to_string());
                        self.set_focus(PhoneControl::PhoneNumber);
                    }
                    _ => {
                        self.code_error = Some(e.to_string());
                        self.set_focus(PhoneControl::VerificationCode);
                    }
                }
                false
            }
            Err(e) => {
                warn!(error = %e, "Verification service failed");
                self.code_error = Some(e.to_string());
                false
            }
        }
    }

    /// Cancel timers before the step is discarded
    pub fn teardown(&mut self) {
        if self.timer.has_pending_timers() {
            debug!("Cancelling cooldown timer on step exit");
        }
        self.timer.cancel();
    }

    /// Handle a key press; returns `true` if it was consumed
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        wizard: &mut WizardController,
        service: &mut dyn VerificationService,
        now: Instant,
    ) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.set_focus(self.focused.next());
                return true;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.set_focus(self.focused.prev());
                return true;
            }
            KeyCode::Esc => {
                self.teardown();
                return wizard.retreat().is_ok();
            }
            KeyCode::Enter => {
                if self.focused == PhoneControl::SendCode {
                    self.send_code(wizard.form(), now);
                } else {
                    self.submit(wizard, service);
                }
                return true;
            }
            _ => {}
        }

        let (input, field) = match self.focused {
            PhoneControl::PhoneNumber => (&mut self.phone_input, FormField::PhoneNumber),
            PhoneControl::VerificationCode => {
                (&mut self.code_input, FormField::VerificationCode)
            }
            PhoneControl::SendCode => {
                if key.code == KeyCode::Char(' ') {
                    self.send_code(wizard.form(), now);
                    return true;
                }
                return false;
            }
        };

        match edit_input(input, key) {
            InputEdit::Changed => {
                let value = input.value().to_string();
                wizard.merge_form_data(FormPatch::text(field, value));
                true
            }
            InputEdit::Moved => true,
            InputEdit::Ignored => false,
        }
    }
}

/// Render the phone verification step
pub fn render(frame: &mut Frame, area: Rect, view: &PhoneVerificationView) {
    let block = Block::default()
        .title(" Phone verification ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Intro
            Constraint::Length(1),
            Constraint::Length(1), // Phone
            Constraint::Length(1),
            Constraint::Length(1), // Code + send button
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "To keep your account secure we need to verify your phone number.",
            Style::default().fg(Color::Gray),
        )),
        chunks[0],
    );

    let mut phone_input = view.phone_input.clone();
    phone_input.invalid = view.phone_error.is_some();
    frame.render_widget(phone_input, chunks[2]);
    render_error(frame, chunks[3], view.phone_error.as_deref());

    let code_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(18)])
        .split(chunks[4]);

    let mut code_input = view.code_input.clone();
    code_input.invalid = view.code_error.is_some();
    frame.render_widget(code_input, code_row[0]);
    render_send_button(
        frame,
        code_row[1],
        &view.timer,
        view.focused == PhoneControl::SendCode,
    );
    render_error(frame, chunks[5], view.code_error.as_deref());

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Submit / send code  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Back"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

fn render_send_button(frame: &mut Frame, area: Rect, timer: &CountdownTimer, focused: bool) {
    let style = if timer.is_locked() {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let label = format!("[ {} ]", timer.label());
    frame.render_widget(Paragraph::new(Span::styled(label, style)), area);
}
