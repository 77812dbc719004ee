//! Logging setup using the tracing ecosystem.
//!
//! Output goes to a daily rotating file so log lines never corrupt the
//! terminal UI. The filter comes from `RUST_LOG` when set.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log filter if RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "confdeck=info,warn";

/// Base name of the log file; the appender adds a date suffix.
const LOG_FILE_NAME: &str = "confdeck.log";

/// Initialize the logging system.
///
/// Logs are stored in the platform local data directory:
/// - Linux: `~/.local/share/confdeck/logs/`
/// - macOS: `~/Library/Application Support/confdeck/logs/`
/// - Windows: `C:\Users\<User>\AppData\Local\confdeck\logs\`
///
/// Use `RUST_LOG=confdeck=debug` for verbose output.
///
/// # Errors
///
/// Returns an error if the log directory cannot be determined or created, or
/// if a global subscriber is already set.
pub fn init() -> anyhow::Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "confdeck starting up");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(())
}

fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("confdeck").join("logs"))
}

/// Where log files are written, for display to users.
pub fn log_directory() -> Option<PathBuf> {
    get_log_directory().ok()
}

/// Log a clean shutdown.
pub fn shutdown() {
    tracing::info!("confdeck shutting down");
}
