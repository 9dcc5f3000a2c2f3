//! Application configuration loaded from environment variables.
//!
//! Only the pre-installation tool is configurable. The web server binds a
//! fixed port and takes no flags.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_database_path() -> String {
    "edutrack.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.database_path.is_empty() {
            return Err("DATABASE_PATH must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_database_path(), "edutrack.db");
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_accepts_defaults() {
        let config = Config {
            database_path: default_database_path(),
            rust_log: default_log_level(),
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_database_path() {
        let config = Config {
            database_path: "".to_string(),
            rust_log: default_log_level(),
        };

        assert!(config.validate().is_err());
    }
}
