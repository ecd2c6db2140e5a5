//! Application state for the TUI
//!
//! The App struct holds the wizard controller, the mounted step view and
//! the overlays drawn on top of it.

use std::time::Instant;

use tracing::debug;

use crate::config::settings::Settings;
use crate::models::SessionId;
use crate::services::{MockVerificationService, VerificationService};
use crate::wizard::WizardController;

use super::steps::StepView;
use super::widgets::notification::NotificationQueue;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App {
    /// Application settings
    pub settings: Settings,

    /// Session record and step machine
    pub wizard: WizardController,

    /// View for the current step
    pub view: StepView,

    /// Session the mounted view belongs to
    mounted_session: SessionId,

    /// Sends and checks one-time codes
    pub service: Box<dyn VerificationService>,

    /// Toasts waiting to be shown
    pub notifications: NotificationQueue,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new App backed by the mock verification service
    pub fn new(settings: Settings) -> Self {
        let service = MockVerificationService::from_settings(&settings.verification);
        Self::with_service(settings, Box::new(service))
    }

    pub fn with_service(settings: Settings, service: Box<dyn VerificationService>) -> Self {
        let wizard = WizardController::new();
        let view = StepView::mount(wizard.step(), wizard.form(), &settings);
        let mounted_session = wizard.session_id();
        Self {
            settings,
            wizard,
            view,
            mounted_session,
            service,
            notifications: NotificationQueue::new(),
            active_dialog: ActiveDialog::default(),
            should_quit: false,
        }
    }

    /// Remount the step view if the wizard moved or restarted
    ///
    /// The outgoing view is torn down first, so no timer outlives its step.
    pub fn sync_view(&mut self) {
        let session = self.wizard.session_id();
        if self.view.step() == self.wizard.step() && self.mounted_session == session {
            return;
        }

        debug!(from = %self.view.step(), to = %self.wizard.step(), "Remounting step view");
        self.view.teardown();
        if self.mounted_session != session {
            self.notifications.clear();
        }
        self.view = StepView::mount(self.wizard.step(), self.wizard.form(), &self.settings);
        self.mounted_session = session;
    }

    /// Periodic update: expire toasts and drive the step's timers
    pub fn on_tick(&mut self, now: Instant) {
        self.notifications.remove_expired(now);

        if let StepView::PhoneVerification(view) = &mut self.view {
            if let Some(toast) = view.on_tick(self.wizard.form(), self.service.as_mut(), now) {
                self.notifications.push(toast);
            }
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.active_dialog = match self.active_dialog {
            ActiveDialog::Help => ActiveDialog::None,
            ActiveDialog::None => ActiveDialog::Help,
        };
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Tear down the mounted view before exit
    pub fn shutdown(&mut self) {
        self.view.teardown();
    }
}
