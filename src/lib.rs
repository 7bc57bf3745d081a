// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(warnings)]                    // All warnings are treated as errors
#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(dead_code)]                   // Unused code is forbidden
#![deny(non_camel_case_types)]        // Types must follow CamelCase convention

// Additional strictness - Leave nothing unchecked
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_variables)]            // Unused variables are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(non_snake_case)]              // Variables and functions must be snake_case
#![deny(non_upper_case_globals)]      // Constants must be UPPER_CASE
#![deny(nonstandard_style)]           // Non-standard code style is forbidden
#![forbid(unsafe_op_in_unsafe_fn)]    // Unsafe ops in unsafe fns are forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::nursery)]             // Experimental lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning
#![warn(clippy::print_stdout)]        // println!() warning
#![warn(clippy::missing_const_for_fn)] // Force const when possible
#![warn(clippy::unwrap_in_result)]    // unwrap() in Result warning
#![warn(clippy::redundant_clone)]     // Useless clones warning
#![warn(clippy::shadow_unrelated)]    // Shadowing unrelated variables warning

// ============================================================================
// Crate Documentation
// ============================================================================

//! # Homework Watch
//!
//! A small watcher bot that polls the Practicum homework review API and
//! forwards review status changes to a Telegram chat.
//!
//! ## Overview
//!
//! The bot is a single sequential polling loop:
//!
//! 1. **Fetch**: one HTTP GET against the homework status endpoint, bounded
//!    below by the poll cursor (`from_date`)
//! 2. **Check**: the decoded payload must be an object carrying
//!    `current_date` and an array-typed `homeworks`
//! 3. **Notify**: the most recent homework record is formatted into a fixed
//!    verdict message and sent to one Telegram chat
//! 4. **Sleep**: a fixed interval, then repeat
//!
//! There is no persistence: the cursor lives in memory and a restart
//! resumes watching from the current time.
//!
//! ## Modules
//!
//! - [`config`]: credentials from the environment
//! - [`logging`]: console + file logging setup
//! - [`practicum`]: homework API client, response checks, verdicts
//! - [`telegram`]: best-effort Telegram notifier
//! - [`watcher`]: the polling driver
//! - [`error`]: the error hierarchy
//!
//! ## Environment
//!
//! Three variables are required and checked at startup: `PRACTICUM_TOKEN`,
//! `TELEGRAM_TOKEN`, and `TELEGRAM_CHAT_ID`. A `.env` file is honored.

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod logging;
pub mod practicum;
pub mod telegram;
pub mod watcher;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::Settings;
pub use error::{ApiError, ConfigError, ResponseError, Result, TelegramError, WatchError};
pub use logging::{init_logging, LogConfig};
pub use practicum::{ApiAnswer, check_response, HomeworkStatus, parse_status, PracticumClient};
pub use telegram::Notifier;
pub use watcher::{Watcher, DEFAULT_POLL_INTERVAL_SECS};
