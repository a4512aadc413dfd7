//! Bot config: chat scope, database, logging. Loaded from env.

use std::env;

use rosterbot_core::{Result, RosterError};

/// Application configuration; values come from the environment (`.env` is
/// loaded by the binary before this runs).
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// SERVER_ID: the only server scope the bot acts in. Required for the
    /// live bot, not for batch commands.
    server_id: Option<String>,
    /// DATABASE_URL
    pub database_url: String,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Builds a config directly; used by embedders that do not configure
    /// through the environment.
    pub fn new(
        server_id: impl Into<String>,
        database_url: impl Into<String>,
        log_file: impl Into<String>,
    ) -> Self {
        Self {
            server_id: Some(server_id.into()),
            database_url: database_url.into(),
            log_file: log_file.into(),
        }
    }

    /// Loads from environment variables, applying defaults for the optional
    /// settings.
    pub fn load() -> Self {
        let server_id = env::var("SERVER_ID").ok();
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "data/roster.db".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/rosterbot.log".to_string());

        Self {
            server_id,
            database_url,
            log_file,
        }
    }

    /// The configured server scope. Fatal at startup for the live bot when
    /// absent.
    pub fn server_id(&self) -> Result<&str> {
        self.server_id
            .as_deref()
            .ok_or_else(|| RosterError::Config("SERVER_ID not configured".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_with_defaults() {
        env::remove_var("SERVER_ID");
        env::remove_var("DATABASE_URL");
        env::remove_var("LOG_FILE");

        let config = BotConfig::load();

        let err = config.server_id().unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
        assert_eq!(err.to_string(), "Config error: SERVER_ID not configured");
        assert_eq!(config.database_url, "data/roster.db");
        assert_eq!(config.log_file, "logs/rosterbot.log");
    }

    #[test]
    #[serial]
    fn test_load_with_custom_values() {
        env::set_var("SERVER_ID", "server-9");
        env::set_var("DATABASE_URL", "custom.db");
        env::set_var("LOG_FILE", "custom.log");

        let config = BotConfig::load();

        assert_eq!(config.server_id().unwrap(), "server-9");
        assert_eq!(config.database_url, "custom.db");
        assert_eq!(config.log_file, "custom.log");

        env::remove_var("SERVER_ID");
        env::remove_var("DATABASE_URL");
        env::remove_var("LOG_FILE");
    }
}
