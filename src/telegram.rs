//! Telegram notifier for review status messages.
//!
//! Delivery is best-effort: a failed send is logged and swallowed, so a
//! notification problem never takes the polling loop down with it.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

use crate::error::{Result, TelegramError};

/// Telegram Bot API base URL.
const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Notifier that delivers messages to a single Telegram chat.
#[derive(Debug, Clone)]
pub struct Notifier {
    /// HTTP client.
    client: Client,
    /// Bot token.
    token: String,
    /// Destination chat identifier.
    chat_id: String,
    /// Bot API base URL.
    base_url: String,
}

impl Notifier {
    /// Creates a new notifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(token: &str, chat_id: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| TelegramError::client(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: token.to_string(),
            chat_id: chat_id.to_string(),
            base_url: String::from(TELEGRAM_API_URL),
        })
    }

    /// Overrides the Bot API base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Sends `text` to the configured chat.
    ///
    /// Delivery failures are logged and never propagated to the caller.
    pub async fn send(&self, text: &str) {
        match self.try_send(text).await {
            Ok(()) => debug!("Delivered Telegram message: \"{text}\""),
            Err(e) => warn!("Failed to deliver Telegram message: {e}"),
        }
    }

    /// Performs one `sendMessage` call.
    async fn try_send(&self, text: &str) -> std::result::Result<(), TelegramError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let body = json!({
            "chat_id": self.chat_id,
            "text": text,
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TelegramError::send(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TelegramError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
