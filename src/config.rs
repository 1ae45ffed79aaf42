//! Configuration module for anonboard.

use serde::Deserialize;
use std::path::Path;

use crate::{BoardError, Result};

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on (0 picks an ephemeral port).
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origins. Empty means any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

/// Listing window configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoardConfig {
    /// Maximum number of threads returned by a board listing.
    #[serde(default = "default_thread_limit")]
    pub thread_limit: usize,
    /// Number of most recent replies shown per thread in a board listing.
    #[serde(default = "default_reply_preview_limit")]
    pub reply_preview_limit: usize,
}

fn default_thread_limit() -> usize {
    10
}

fn default_reply_preview_limit() -> usize {
    3
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            thread_limit: default_thread_limit(),
            reply_preview_limit: default_reply_preview_limit(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file. When unset, logs go to stdout only.
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Listing windows.
    #[serde(default)]
    pub board: BoardConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(BoardError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| BoardError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `ANONBOARD_HOST`: bind address
    /// - `ANONBOARD_PORT`: listen port
    /// - `ANONBOARD_LOG_LEVEL`: log level
    ///
    /// Empty or unparsable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("ANONBOARD_HOST") {
            if !host.is_empty() {
                self.server.host = host;
            }
        }
        if let Ok(port) = std::env::var("ANONBOARD_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(level) = std::env::var("ANONBOARD_LOG_LEVEL") {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if a board listing could never return a thread.
    pub fn validate(&self) -> Result<()> {
        if self.board.thread_limit == 0 {
            return Err(BoardError::Config(
                "board.thread_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.cors_origins.is_empty());

        assert_eq!(config.board.thread_limit, 10);
        assert_eq!(config.board.reply_preview_limit, 3);

        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 8080
cors_origins = ["http://localhost:5173"]

[board]
thread_limit = 20
reply_preview_limit = 5

[logging]
level = "debug"
file = "logs/anonboard.log"
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.board.thread_limit, 20);
        assert_eq!(config.board.reply_preview_limit, 5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file.as_deref(), Some("logs/anonboard.log"));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml = r#"
[board]
reply_preview_limit = 1
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.board.reply_preview_limit, 1);
        assert_eq!(config.board.thread_limit, 10);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.board.thread_limit, 10);
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("this is not valid toml [[[");

        assert!(result.is_err());
        if let Err(BoardError::Config(msg)) = result {
            assert!(msg.contains("config parse error"));
        } else {
            panic!("Expected Config error");
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load("nonexistent.toml");
        assert!(matches!(result, Err(BoardError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 4000\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 4000);
    }

    // Both override cases share one test so they never race on the process environment.
    #[test]
    fn test_apply_env_overrides() {
        let original = std::env::var("ANONBOARD_PORT").ok();

        std::env::set_var("ANONBOARD_PORT", "4321");
        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.server.port, 4321);

        std::env::set_var("ANONBOARD_PORT", "not-a-port");
        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.server.port, 3000);

        if let Some(val) = original {
            std::env::set_var("ANONBOARD_PORT", val);
        } else {
            std::env::remove_var("ANONBOARD_PORT");
        }
    }

    #[test]
    fn test_validate_zero_thread_limit() {
        let mut config = Config::default();
        config.board.thread_limit = 0;

        let result = config.validate();
        assert!(matches!(result, Err(BoardError::Config(_))));
    }

    #[test]
    fn test_validate_defaults() {
        let mut config = Config::default();
        config.board.reply_preview_limit = 0;
        assert!(config.validate().is_ok());
    }
}
