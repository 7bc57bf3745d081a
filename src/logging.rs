//! Logging setup for console and file output.
//!
//! Log lines go to two destinations: the console and an append-only file,
//! both in a `timestamp - level - message` shape. The subscriber is built
//! once from an explicit [`LogConfig`] rather than module-level state.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::error::{ConfigError, Result, WatchError};

/// Logging configuration for the watcher process.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Path of the append-only log file.
    pub file: PathBuf,
    /// Enables debug-level output.
    pub verbose: bool,
}

/// Initializes logging to the console and the configured append-only file.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = if config.verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("homework_watch=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("homework_watch=info"))
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .map_err(|e| {
            WatchError::Config(ConfigError::Logging {
                message: format!("Failed to open log file {}: {e}", config.file.display()),
            })
        })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();

    Ok(())
}
