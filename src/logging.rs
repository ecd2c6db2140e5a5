//! Logging initialization for Secure Verify
//!
//! TUI mode: logs to `<base>/logs/secure-verify-{datetime}.log` because the
//! terminal belongs to the wizard.
//! CLI mode: logs to stderr.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Settings, VerifyPaths};

/// Result of logging initialization
pub struct LoggingHandle {
    /// Keeps the non-blocking writer alive; buffered lines flush on drop
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file (only set in TUI mode with file logging enabled)
    pub log_file_path: Option<PathBuf>,
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level, and
/// `debug_override` (the `--debug` flag) over both.
pub fn init_logging(
    settings: &Settings,
    paths: &VerifyPaths,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let filter = build_filter(&settings.logging.level, debug_override);

    if is_tui_mode && settings.logging.to_file {
        let logs_dir = paths.logs_dir();
        std::fs::create_dir_all(&logs_dir)?;

        let log_filename = log_file_name(chrono::Utc::now());
        let log_file_path = logs_dir.join(&log_filename);

        let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .try_init()?;

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}

fn build_filter(configured_level: &str, debug_override: bool) -> EnvFilter {
    if debug_override {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured_level))
}

/// Log file name for a session started at `now`
fn log_file_name(now: chrono::DateTime<chrono::Utc>) -> String {
    format!("secure-verify-{}.log", now.format("%Y%m%dT%H%M%SZ"))
}

/// Whether `path` looks like a log file written by this module
pub fn is_log_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with("secure-verify-") && n.ends_with(".log"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_name_format() {
        let at = chrono::Utc.with_ymd_and_hms(2026, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(log_file_name(at), "secure-verify-20260309T070501Z.log");
    }

    #[test]
    fn test_is_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = VerifyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let log = paths.logs_dir().join(log_file_name(chrono::Utc::now()));
        assert!(is_log_file(&log));
        assert!(!is_log_file(&paths.settings_file()));
    }

    #[test]
    fn test_debug_flag_overrides_level() {
        // The global subscriber can only be installed once per process,
        // so only the filter construction is checked here
        assert_eq!(build_filter("warn", true).to_string(), "debug");
    }
}
