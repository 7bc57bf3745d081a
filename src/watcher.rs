//! Polling loop that watches for homework review status changes.
//!
//! The watcher owns the poll cursor for the lifetime of the process; there
//! is no persistence, so a restart starts watching from "now" again. Every
//! cycle runs fetch, shape check, format, notify in sequence, and any
//! failure along the way leaves the cursor where it was.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::Result;
use crate::practicum::{check_response, parse_status, PracticumClient};
use crate::telegram::Notifier;

/// Default delay between polling cycles in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

/// Polling driver that forwards review status changes to the notifier.
#[derive(Debug)]
pub struct Watcher {
    /// Homework API client.
    client: PracticumClient,
    /// Telegram notifier.
    notifier: Notifier,
    /// Delay between polling cycles.
    interval: Duration,
    /// Timestamp lower bound for the next request.
    cursor: Option<i64>,
}

impl Watcher {
    /// Creates a new watcher with the default polling interval.
    #[must_use]
    pub const fn new(client: PracticumClient, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            cursor: None,
        }
    }

    /// Sets the polling interval.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Returns the current poll cursor.
    #[must_use]
    pub const fn cursor(&self) -> Option<i64> {
        self.cursor
    }

    /// Runs the polling loop until the process is killed.
    ///
    /// Cycle failures are logged and printed, never raised; the loop sleeps
    /// for the fixed interval after every cycle regardless of its outcome.
    pub async fn run(&mut self) {
        info!(
            "Watching homework statuses, polling every {}s",
            self.interval.as_secs()
        );

        loop {
            if let Err(e) = self.poll_once().await {
                error!("Watch cycle failed: {e}");
                eprintln!("Watch cycle failed: {e}");
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Executes one polling cycle.
    ///
    /// The cursor only advances when the fetch and the shape check both
    /// succeed in this cycle; a failed cycle retries from the same cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails, the response is malformed, or
    /// the first record cannot be formatted.
    pub async fn poll_once(&mut self) -> Result<()> {
        let answer = self.client.fetch(self.cursor).await?;
        debug!("Homework API answered with status {}", answer.status);

        let homeworks = check_response(&answer.payload)?;

        if let Some(record) = homeworks.first() {
            let message = parse_status(record)?;
            self.notifier.send(&message).await;
        } else {
            debug!("No new homework statuses in response");
        }

        if let Some(next) = next_cursor(&answer.payload, answer.from_date) {
            self.cursor = Some(next);
        }

        Ok(())
    }
}

/// Picks the next poll cursor from a checked response.
///
/// Prefers the payload's `current_date`; falls back to the top-level
/// `from_date` echo when `current_date` is not an integer.
fn next_cursor(payload: &Value, from_date_echo: Option<i64>) -> Option<i64> {
    payload
        .get("current_date")
        .and_then(Value::as_i64)
        .or(from_date_echo)
}
