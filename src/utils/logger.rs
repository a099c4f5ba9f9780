use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Where log records are written
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Standard error, for the plain commands
    Stderr,
    /// Append to a file, so the TUI is never drawn over
    File(PathBuf),
}

/// Initialize the logging system
pub fn init_logger(target: LogTarget) -> Result<()> {
    // Use RUST_LOG environment variable, default to info level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(false)
                        .with_thread_ids(false)
                        .with_thread_names(false)
                        .compact(),
                )
                .try_init()
                .context("Failed to install log subscriber")?;
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(false)
                        .compact(),
                )
                .try_init()
                .context("Failed to install log subscriber")?;
        }
    }

    Ok(())
}

/// Log an info message with emoji prefix
pub fn log_info(emoji: &str, message: impl std::fmt::Display) {
    info!("{} {}", emoji, message);
}

/// Log a warning message with emoji prefix
pub fn log_warn(emoji: &str, message: impl std::fmt::Display) {
    warn!("{} {}", emoji, message);
}

/// Log an error message with emoji prefix
pub fn log_error(emoji: &str, message: impl std::fmt::Display) {
    error!("{} {}", emoji, message);
}

/// Log a debug message
pub fn log_debug(message: impl std::fmt::Display) {
    debug!("{}", message);
}
