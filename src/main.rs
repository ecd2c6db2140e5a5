use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use secure_verify::config::{Settings, VerifyPaths};
use secure_verify::logging::{init_logging, is_log_file};
use secure_verify::models::phone::{CODE_DIGITS, PHONE_DIGITS};

#[derive(Parser)]
#[command(
    name = "secure-verify",
    version,
    about = "Terminal-based identity verification wizard",
    long_about = "Secure Verify walks you through a three-step identity check: \
                  personal information, phone verification with a one-time code, \
                  and a summary of the verified details."
)]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG and the configured level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the verification wizard (default)
    #[command(alias = "run")]
    Tui,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = VerifyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let is_tui_mode = matches!(cli.command, None | Some(Commands::Tui));
    let logging = init_logging(&settings, &paths, is_tui_mode, cli.debug)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            info!(base_dir = %paths.base_dir().display(), "Starting wizard");
            secure_verify::tui::run_tui(&settings)?;
            if let Some(path) = &logging.log_file_path {
                println!("Session log written to {}", path.display());
            }
        }
        Some(Commands::Init) => {
            println!("Initializing Secure Verify at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            info!(path = %paths.settings_file().display(), "Settings written");
            println!("Settings written to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Secure Verify Configuration");
            println!("===========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Logs directory:   {}", paths.logs_dir().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!("Log files:        {}", count_log_files(&paths));
            println!();
            println!("Settings:");
            println!("  Test code:        {}", settings.verification.mock_code);
            println!("  Send delay:       {} ms", settings.verification.send_delay_ms);
            println!("  Resend cooldown:  {} s", settings.verification.cooldown_secs);
            println!("  Tick rate:        {} ms", settings.ui.tick_rate_ms);
            println!("  Toast duration:   {} s", settings.ui.notification_secs);
            println!("  Log level:        {}", settings.logging.level);
            println!("  Log to file:      {}", settings.logging.to_file);
            println!();
            println!(
                "Phone numbers have {} digits; verification codes have {}.",
                PHONE_DIGITS, CODE_DIGITS
            );
        }
    }

    Ok(())
}

fn count_log_files(paths: &VerifyPaths) -> usize {
    std::fs::read_dir(paths.logs_dir())
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| is_log_file(&entry.path()))
                .count()
        })
        .unwrap_or(0)
}
