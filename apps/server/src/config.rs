//! Server configuration.

use std::path::PathBuf;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address (e.g. "0.0.0.0:8080").
    pub bind_address: String,
    /// Path to the SQLite database file.
    pub database_path: PathBuf,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            database_path: default_database_path(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the environment, honoring a `.env` file.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(address) = std::env::var("TASKLIST_BIND_ADDRESS") {
            config.bind_address = address;
        }

        if let Ok(path) = std::env::var("TASKLIST_DATABASE_PATH") {
            config.database_path = PathBuf::from(path);
        }

        if let Ok(level) = std::env::var("TASKLIST_LOG_LEVEL") {
            config.log_level = level;
        }

        config
    }
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tasklist")
        .join("tasklist.db")
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.log_level, "info");
        assert!(config.database_path.ends_with("tasklist.db"));
    }
}
