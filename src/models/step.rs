//! Wizard step model
//!
//! The wizard is a linear three-state chain. Forward moves are defined for
//! the first two steps, a backward move only out of phone verification.

use std::fmt;

/// A step of the verification wizard, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    /// Collect name, ID document, birthday and gender
    PersonalInfo = 1,
    /// Verify the phone number with a one-time code
    PhoneVerification = 2,
    /// Read-only confirmation summary (terminal)
    Success = 3,
}

impl WizardStep {
    /// All steps in order
    pub const ALL: [WizardStep; 3] = [
        WizardStep::PersonalInfo,
        WizardStep::PhoneVerification,
        WizardStep::Success,
    ];

    /// 1-based position of the step
    pub fn number(self) -> u8 {
        self as u8
    }

    /// The step `advance` moves to, if any
    pub fn next(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => Some(Self::PhoneVerification),
            Self::PhoneVerification => Some(Self::Success),
            Self::Success => None,
        }
    }

    /// The step `retreat` moves to, if any
    ///
    /// Success is terminal: the only way out of it is a restart.
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::PhoneVerification => Some(Self::PersonalInfo),
            Self::PersonalInfo | Self::Success => None,
        }
    }

    /// Whether this is the last step
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Short label used by the progress indicator
    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal info",
            Self::PhoneVerification => "Phone verification",
            Self::Success => "Done",
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::PersonalInfo
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}
