// src/core/config.rs
use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::history::{DEFAULT_HISTORY_FILE, MAX_HISTORY};

// Configuration for the password utility
#[derive(Debug, Clone)]
pub struct Config {
    // History
    pub history_file: PathBuf,
    pub max_history: usize,

    // Password Generation
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // History
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
            max_history: MAX_HISTORY,

            // Password Generation
            default_password_length: 16,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // History
        if let Ok(file) = env::var("HISTORY_FILE") {
            config.history_file = PathBuf::from(file);
        }

        if let Ok(val) = env::var("MAX_HISTORY") {
            if let Ok(max) = val.parse() {
                config.max_history = max;
            }
        }

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_policy() {
        let config = Config::default();
        assert_eq!(config.history_file, PathBuf::from("password_history.json"));
        assert_eq!(config.max_history, 5);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
