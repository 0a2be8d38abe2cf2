//! Configuration management for the contact book.
//!
//! This module handles loading configuration from environment variables.
//! A `.env` file is honored when present but never required; nothing in
//! the configuration is mandatory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing_subscriber::EnvFilter;

const DEFAULT_PROMPT: &str = "Enter a command: ";
const DEFAULT_LOG_LEVEL: &str = "error";

/// Runtime settings for the interactive session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before each input line (default: "Enter a command: ")
    pub prompt: String,

    /// Log filter used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PROMPT`: prompt text shown before each command
    /// - `LOG_LEVEL`: tracing filter directive (default: "error")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `LOG_LEVEL` is not a valid
    /// filter directive.
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let prompt =
            env::var("CONTACT_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        // Reject filter directives tracing-subscriber can't parse, so a
        // typo surfaces at startup instead of silencing all logging
        EnvFilter::try_new(&log_level).map_err(|e| ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Config { prompt, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
