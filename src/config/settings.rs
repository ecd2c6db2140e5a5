//! User settings for Secure Verify
//!
//! Tunables for the simulated verification backend, the TUI loop and
//! logging. Every field has a default so a partial or missing file works.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::paths::VerifyPaths;
use crate::error::VerifyError;
use crate::models::phone::CODE_DIGITS;

/// Settings for the simulated code delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationSettings {
    /// The only code the mock backend accepts
    pub mock_code: String,

    /// Simulated delivery latency before the cooldown starts
    pub send_delay_ms: u64,

    /// Resend cooldown length
    pub cooldown_secs: u32,
}

impl Default for VerificationSettings {
    fn default() -> Self {
        Self {
            mock_code: "123456".to_string(),
            send_delay_ms: 1000,
            cooldown_secs: 60,
        }
    }
}

impl VerificationSettings {
    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }
}

/// Settings for the terminal UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Interval between tick events driving timers and toasts
    pub tick_rate_ms: u64,

    /// How long a toast notification stays on screen
    pub notification_secs: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            notification_secs: 8,
        }
    }
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Settings for tracing output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,

    /// Write logs to a file while the TUI owns the terminal
    pub to_file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            to_file: true,
        }
    }
}

/// User settings for Secure Verify
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub verification: VerificationSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            verification: VerificationSettings::default(),
            ui: UiSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &VerifyPaths) -> Result<Self, VerifyError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| VerifyError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| VerifyError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &VerifyPaths) -> Result<(), VerifyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| VerifyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| VerifyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the wizard cannot run with
    pub fn validate(&self) -> Result<(), VerifyError> {
        let code = &self.verification.mock_code;
        if code.len() != CODE_DIGITS || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VerifyError::Config(format!(
                "verification.mock_code must be {} digits, got '{}'",
                CODE_DIGITS, code
            )));
        }

        if self.verification.cooldown_secs == 0 {
            return Err(VerifyError::Config(
                "verification.cooldown_secs must be greater than zero".into(),
            ));
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(VerifyError::Config(
                "ui.tick_rate_ms must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}
