//! Homework watch CLI entrypoint.
//!
//! This is the main entrypoint for the hwatch command-line tool.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use homework_watch::config::{self, Settings};
use homework_watch::error::Result;
use homework_watch::logging::{init_logging, LogConfig};
use homework_watch::practicum::PracticumClient;
use homework_watch::telegram::Notifier;
use homework_watch::watcher::{Watcher, DEFAULT_POLL_INTERVAL_SECS};

/// Watches homework review statuses and forwards changes to Telegram.
#[derive(Parser, Debug)]
#[command(name = "hwatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Path of the append-only log file.
    #[arg(long, default_value = "bot.log", env = "HWATCH_LOG_FILE")]
    log_file: PathBuf,

    /// Delay between polling cycles in seconds.
    #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_SECS, env = "HWATCH_POLL_INTERVAL")]
    interval: u64,
}

/// Main entrypoint.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_config = LogConfig {
        file: cli.log_file.clone(),
        verbose: cli.verbose,
    };
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    config::load_dotenv();

    // Startup check: all three credentials must be present before the loop
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Required configuration is missing: {e}");
            eprintln!("Required configuration is missing: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Run async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(settings, cli.interval)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Builds the client and notifier, then runs the watch loop.
async fn run(settings: Settings, interval_secs: u64) -> Result<()> {
    let client = PracticumClient::new(&settings.practicum_token)?;
    let notifier = Notifier::new(&settings.telegram_token, &settings.telegram_chat_id)?;

    let mut watcher =
        Watcher::new(client, notifier).with_interval(Duration::from_secs(interval_secs));

    info!("Configuration loaded, starting watcher");
    watcher.run().await;

    Ok(())
}
