//! Error types for the homework watch bot.
//!
//! This module provides the error hierarchy for the two failure tiers the
//! bot distinguishes: fatal startup problems (configuration, logging) and
//! recoverable steady-state problems (API, response shape). Telegram
//! delivery errors exist as a type but are consumed inside the notifier.

use thiserror::Error;

/// The main error type for the homework watch bot.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Homework API errors.
    #[error("Homework API error: {0}")]
    Api(#[from] ApiError),

    /// Response shape errors.
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Telegram errors. Only construction failures surface here; delivery
    /// failures are handled inside the notifier and never escape it.
    #[error("Telegram error: {0}")]
    Telegram(#[from] TelegramError),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable is missing.
    #[error("Missing environment variable: {name}")]
    MissingEnvVar {
        /// Name of the missing variable.
        name: String,
    },

    /// Logging could not be initialized.
    #[error("Failed to initialize logging: {message}")]
    Logging {
        /// Description of the logging setup failure.
        message: String,
    },
}

/// Homework API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network error.
    #[error("Network error communicating with the homework API: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// API request returned a non-200 status.
    #[error("Homework API request failed with status code {status}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
    },

    /// Response body could not be decoded.
    #[error("Invalid response from the homework API: {message}")]
    InvalidResponse {
        /// Description of the decode failure.
        message: String,
    },

    /// A 200 response carried an embedded error payload.
    #[error("Homework API reported an error: {message}")]
    Upstream {
        /// Error message embedded in the payload.
        message: String,
    },
}

/// Response shape errors raised by the validator and the status formatter.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// A field has an unexpected JSON type.
    #[error("Unexpected type for {field}: {found}")]
    TypeMismatch {
        /// The field with the wrong type.
        field: String,
        /// The JSON type actually found.
        found: String,
    },

    /// A required key is absent.
    #[error("Response is missing required key: {key}")]
    MissingKey {
        /// Name of the missing key.
        key: String,
    },

    /// A status code outside the verdict set.
    #[error("Unknown homework status: {status}")]
    UnknownStatus {
        /// The unrecognized status code.
        status: String,
    },
}

/// Telegram notifier errors.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// The HTTP client could not be created.
    #[error("Failed to create Telegram client: {message}")]
    Client {
        /// Description of the construction failure.
        message: String,
    },

    /// The send request failed at the transport level.
    #[error("Failed to send Telegram message: {message}")]
    Send {
        /// Description of the transport failure.
        message: String,
    },

    /// The Telegram API rejected the request.
    #[error("Telegram API returned status {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body returned by the API.
        body: String,
    },
}

/// Result type alias for homework watch operations.
pub type Result<T> = std::result::Result<T, WatchError>;

impl ApiError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates an invalid-response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

impl ResponseError {
    /// Creates a type-mismatch error for a field.
    #[must_use]
    pub fn type_mismatch(field: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            found: found.into(),
        }
    }

    /// Creates a missing-key error.
    #[must_use]
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// Creates an unknown-status error.
    #[must_use]
    pub fn unknown_status(status: impl Into<String>) -> Self {
        Self::UnknownStatus {
            status: status.into(),
        }
    }
}

impl TelegramError {
    /// Creates a client construction error.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Creates a transport-level send error.
    #[must_use]
    pub fn send(message: impl Into<String>) -> Self {
        Self::Send {
            message: message.into(),
        }
    }
}
