//! Configuration loading from the process environment.
//!
//! The bot needs exactly three credentials, all supplied as environment
//! variables. They are checked once at startup, before the polling loop
//! starts; a missing variable is fatal and reported by name.

use tracing::{debug, error, info};

use crate::error::{ConfigError, Result, WatchError};

/// Environment variable holding the Practicum API token.
pub const ENV_PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";

/// Environment variable holding the Telegram bot token.
pub const ENV_TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";

/// Environment variable holding the destination chat identifier.
pub const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Runtime credentials for the watcher process.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Practicum API token used for the authorization header.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// Telegram chat that receives notifications.
    pub telegram_chat_id: String,
}

impl Settings {
    /// Loads settings from the environment, checking each required variable.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing variable.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads settings through an injected variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |name: &str| -> Result<String> {
            debug!("Checking environment variable {name}");
            lookup(name).ok_or_else(|| {
                error!("Required environment variable {name} is not set");
                WatchError::Config(ConfigError::MissingEnvVar {
                    name: name.to_string(),
                })
            })
        };

        let settings = Self {
            practicum_token: require(ENV_PRACTICUM_TOKEN)?,
            telegram_token: require(ENV_TELEGRAM_TOKEN)?,
            telegram_chat_id: require(ENV_TELEGRAM_CHAT_ID)?,
        };

        info!("All required environment variables are set");
        Ok(settings)
    }
}

/// Loads variables from a `.env` file in the working directory, if present.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from: {}", path.display()),
        Err(_) => debug!(".env file not found"),
    }
}
