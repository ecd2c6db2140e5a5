//! Path management for Secure Verify
//!
//! ## Path Resolution Order
//!
//! 1. `SECURE_VERIFY_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/secure-verify` on Linux,
//!    `~/Library/Application Support/secure-verify` on macOS,
//!    `%APPDATA%\secure-verify\config` on Windows)
//!
//! Only settings and log files live here. Wizard session data is never
//! written to disk.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::VerifyError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SECURE_VERIFY_DATA_DIR";

/// Manages all paths used by Secure Verify
#[derive(Debug, Clone)]
pub struct VerifyPaths {
    base_dir: PathBuf,
}

impl VerifyPaths {
    /// Create a new VerifyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, VerifyError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create VerifyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory that holds TUI log files
    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), VerifyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| VerifyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.logs_dir())
            .map_err(|e| VerifyError::Io(format!("Failed to create logs directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, VerifyError> {
    ProjectDirs::from("", "", "secure-verify")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| VerifyError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VerifyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.logs_dir(), temp_dir.path().join("logs"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = VerifyPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VerifyPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.logs_dir().exists());
    }
}
