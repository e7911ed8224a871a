//! Server configuration.

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration from the environment.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "Failed to parse config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Server configuration.
///
/// Every field falls back to its default when the corresponding environment
/// variable (`HOST`, `PORT`) is unset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 2017,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the current directory is loaded first when present
    /// (a missing file is not an error), then environment variables override
    /// the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        load_from_env()
    }

    pub(crate) fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AsRef<ServerConfig> for ServerConfig {
    fn as_ref(&self) -> &ServerConfig {
        self
    }
}

/// Load config from environment variables only.
pub(crate) fn load_from_env<C: DeserializeOwned>() -> Result<C, ConfigError> {
    use config::{Config, Environment};

    Config::builder()
        .add_source(Environment::default().try_parsing(true))
        .build()
        .and_then(|c| c.try_deserialize::<C>())
        .map_err(|e| ConfigError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Serializes tests that touch process-global environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 2017);
    }

    #[test]
    fn server_config_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn load_from_env_reads_port() {
        let _guard = ENV_LOCK.lock().unwrap();

        std::env::set_var("PORT", "5000");
        let config: ServerConfig = load_from_env().unwrap();
        assert_eq!(config.port, 5000);

        std::env::remove_var("PORT");
        let config: ServerConfig = load_from_env().unwrap();
        assert_eq!(config.port, 2017);
    }

    #[test]
    fn dotenv_file_populates_environment() {
        let _guard = ENV_LOCK.lock().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join(".env");

        let mut file = std::fs::File::create(&env_path).unwrap();
        writeln!(file, "SAYHI_DOTENV_MARKER=hello").unwrap();

        dotenvy::from_path(&env_path).unwrap();
        assert_eq!(std::env::var("SAYHI_DOTENV_MARKER").unwrap(), "hello");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Parse("invalid syntax".to_string());
        assert!(err.to_string().contains("invalid syntax"));
    }
}
