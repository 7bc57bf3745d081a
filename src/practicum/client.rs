//! Homework API client implementation.
//!
//! This module provides the HTTP client for the Practicum homework status
//! endpoint. One call means one GET; the polling loop's fixed sleep is the
//! only retry mechanism.

use std::time::Duration;

use chrono::Utc;
use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Result};

use super::types::ApiAnswer;

/// Homework status endpoint.
const API_URL: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the homework review API.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// HTTP client.
    client: Client,
    /// API token for the authorization header.
    token: String,
    /// Endpoint URL.
    base_url: String,
}

impl PracticumClient {
    /// Creates a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token: token.to_string(),
            base_url: String::from(API_URL),
        })
    }

    /// Overrides the endpoint URL.
    #[must_use]
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Fetches homework statuses changed since `cursor`.
    ///
    /// When `cursor` is absent the current wall-clock time is substituted,
    /// so the first request only sees changes from this point on.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-200 responses, bodies that are not
    /// JSON, and 200 responses carrying an embedded `error` field.
    pub async fn fetch(&self, cursor: Option<i64>) -> Result<ApiAnswer> {
        let from_date = cursor.unwrap_or_else(|| Utc::now().timestamp());

        debug!("Requesting homework statuses with from_date={from_date}");

        let response = self
            .client
            .get(&self.base_url)
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {e}")))?;

        let status = response.status();

        if status != StatusCode::OK {
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
            }
            .into());
        }

        let payload: Value = response.json().await.map_err(|e| {
            ApiError::invalid_response(format!("Failed to decode response body: {e}"))
        })?;

        if let Some(error) = payload.get("error") {
            let message = error
                .as_str()
                .map_or_else(|| error.to_string(), ToString::to_string);
            return Err(ApiError::Upstream { message }.into());
        }

        let from_date_echo = payload.get("from_date").and_then(Value::as_i64);

        Ok(ApiAnswer {
            payload,
            from_date: from_date_echo,
            status: status.as_u16(),
        })
    }
}
