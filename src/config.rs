//! Configuration management for the contact bot.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file. Every setting has a default, so an empty environment is a
//! valid configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before each input line (default: "Enter a command: ")
    pub prompt: String,

    /// Maximum number of `search` results to return (default: 5)
    pub max_search_results: usize,

    /// Fuzzy search confidence threshold (0-100, default: 30)
    pub search_confidence_threshold: u8,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOT_PROMPT`: Input prompt (default: "Enter a command: ")
    /// - `SEARCH_MAX_RESULTS`: Max search results (default: 5)
    /// - `SEARCH_CONFIDENCE_THRESHOLD`: Min confidence score (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Config::default();

        let prompt = env::var("CONTACT_BOT_PROMPT").unwrap_or(defaults.prompt);
        let max_search_results =
            Self::parse_env_usize("SEARCH_MAX_RESULTS", defaults.max_search_results)?;
        let search_confidence_threshold = Self::parse_env_u8(
            "SEARCH_CONFIDENCE_THRESHOLD",
            defaults.search_confidence_threshold,
        )?;

        if search_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            prompt,
            max_search_results,
            search_confidence_threshold,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "Enter a command: ".to_string(),
            max_search_results: 5,
            search_confidence_threshold: 30,
            log_level: "error".to_string(),
        }
    }
}
