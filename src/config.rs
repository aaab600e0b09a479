//! Configuration management for the SavePaws volunteer server.
//!
//! This module handles loading and validating configuration from environment variables.
//! Every setting is optional, so a bare environment yields the demo defaults.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default number of featured events shown next to a contribution history.
pub const DEFAULT_FEATURED_EVENT_LIMIT: usize = 2;

/// Default message sent to a volunteer after joining a program.
pub const DEFAULT_CONFIRMATION_MESSAGE: &str = "You have successfully registered for the event!";

/// Configuration for the SavePaws volunteer server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Size of the featured-event snippet on the summary page (default: 2)
    pub featured_event_limit: usize,

    /// Whether to seed the fixed demo programs and contributions (default: true)
    pub seed_demo_data: bool,

    /// Confirmation text sent after a successful join
    pub confirmation_message: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `FEATURED_EVENT_LIMIT`: Featured events per summary (default: 2)
    /// - `SEED_DEMO_DATA`: Seed demo data on start (default: true)
    /// - `CONFIRMATION_MESSAGE`: Text of the join confirmation
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is normal; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let featured_event_limit =
            Self::parse_env_usize("FEATURED_EVENT_LIMIT", DEFAULT_FEATURED_EVENT_LIMIT)?;
        let seed_demo_data = Self::parse_env_bool("SEED_DEMO_DATA", true)?;

        let confirmation_message = env::var("CONFIRMATION_MESSAGE")
            .unwrap_or_else(|_| DEFAULT_CONFIRMATION_MESSAGE.to_string());

        if confirmation_message.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONFIRMATION_MESSAGE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            featured_event_limit,
            seed_demo_data,
            confirmation_message,
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

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            featured_event_limit: DEFAULT_FEATURED_EVENT_LIMIT,
            seed_demo_data: true,
            confirmation_message: DEFAULT_CONFIRMATION_MESSAGE.to_string(),
            log_level: "error".to_string(),
        }
    }
}
