// Runtime configuration, read from the environment.
//
// COMMENT_BOARD_HOST  interface to bind (default 0.0.0.0)
// COMMENT_BOARD_PORT  port to bind (default 8080)

use thiserror::Error;

pub const HOST_VAR: &str = "COMMENT_BOARD_HOST";
pub const PORT_VAR: &str = "COMMENT_BOARD_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: expected a port number")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or blank variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = non_blank(lookup(HOST_VAR)) {
            config.host = host;
        }

        if let Some(port) = non_blank(lookup(PORT_VAR)) {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: port.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
