//! Keybinding definitions
//!
//! Single source for the help overlay and the status bar hints

use crossterm::event::{KeyCode, KeyModifiers};

use crate::models::WizardStep;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
    /// Shown in the status bar
    pub hint: bool,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    PersonalInfo,
    PhoneVerification,
    Success,
    /// Active while the help overlay is open
    Help,
}

impl KeyContext {
    pub fn for_step(step: WizardStep) -> Self {
        match step {
            WizardStep::PersonalInfo => Self::PersonalInfo,
            WizardStep::PhoneVerification => Self::PhoneVerification,
            WizardStep::Success => Self::Success,
        }
    }

    /// Section heading in the help overlay
    pub fn title(self) -> &'static str {
        match self {
            Self::Global => "Global Keys",
            Self::PersonalInfo => "Personal info",
            Self::PhoneVerification => "Phone verification",
            Self::Success => "Done",
            Self::Help => "Help",
        }
    }
}

const fn bind(
    key: KeyCode,
    modifiers: KeyModifiers,
    description: &'static str,
    context: KeyContext,
    hint: bool,
) -> Keybinding {
    Keybinding {
        key,
        modifiers,
        description,
        context,
        hint,
    }
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    bind(KeyCode::Char('c'), KeyModifiers::CONTROL, "Quit", KeyContext::Global, true),
    bind(KeyCode::F(1), KeyModifiers::NONE, "Show/hide help", KeyContext::Global, true),
    // Personal info
    bind(KeyCode::Tab, KeyModifiers::NONE, "Next field", KeyContext::PersonalInfo, true),
    bind(KeyCode::BackTab, KeyModifiers::SHIFT, "Previous field", KeyContext::PersonalInfo, false),
    bind(KeyCode::Down, KeyModifiers::NONE, "Next field", KeyContext::PersonalInfo, false),
    bind(KeyCode::Up, KeyModifiers::NONE, "Previous field", KeyContext::PersonalInfo, false),
    bind(KeyCode::Left, KeyModifiers::NONE, "Previous ID type / toggle gender", KeyContext::PersonalInfo, false),
    bind(KeyCode::Right, KeyModifiers::NONE, "Next ID type / toggle gender", KeyContext::PersonalInfo, false),
    bind(KeyCode::Char(' '), KeyModifiers::NONE, "Next ID type / toggle gender", KeyContext::PersonalInfo, false),
    bind(KeyCode::Char('m'), KeyModifiers::NONE, "Male (gender field)", KeyContext::PersonalInfo, false),
    bind(KeyCode::Char('f'), KeyModifiers::NONE, "Female (gender field)", KeyContext::PersonalInfo, false),
    bind(KeyCode::Enter, KeyModifiers::NONE, "Next step", KeyContext::PersonalInfo, true),
    // Phone verification
    bind(KeyCode::Tab, KeyModifiers::NONE, "Next field", KeyContext::PhoneVerification, true),
    bind(KeyCode::BackTab, KeyModifiers::SHIFT, "Previous field", KeyContext::PhoneVerification, false),
    bind(KeyCode::Down, KeyModifiers::NONE, "Next field", KeyContext::PhoneVerification, false),
    bind(KeyCode::Up, KeyModifiers::NONE, "Previous field", KeyContext::PhoneVerification, false),
    bind(KeyCode::Enter, KeyModifiers::NONE, "Submit / send code on button", KeyContext::PhoneVerification, true),
    bind(KeyCode::Char(' '), KeyModifiers::NONE, "Send code (on button)", KeyContext::PhoneVerification, false),
    bind(KeyCode::Esc, KeyModifiers::NONE, "Back to personal info", KeyContext::PhoneVerification, true),
    // Success
    bind(KeyCode::Enter, KeyModifiers::NONE, "Verify another identity", KeyContext::Success, true),
    bind(KeyCode::Char('r'), KeyModifiers::NONE, "Verify another identity", KeyContext::Success, false),
    bind(KeyCode::Char('q'), KeyModifiers::NONE, "Quit", KeyContext::Success, true),
    bind(KeyCode::Char('?'), KeyModifiers::NONE, "Show help", KeyContext::Success, false),
    // Help
    bind(KeyCode::Esc, KeyModifiers::NONE, "Close help", KeyContext::Help, true),
    bind(KeyCode::Char('q'), KeyModifiers::NONE, "Close help", KeyContext::Help, false),
    bind(KeyCode::Char('?'), KeyModifiers::NONE, "Close help", KeyContext::Help, false),
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context || kb.context == KeyContext::Global)
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }

    let key_str = match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) if kb.modifiers.contains(KeyModifiers::CONTROL) => {
            c.to_ascii_uppercase().to_string()
        }
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(key_str);
    parts.join("+")
}
