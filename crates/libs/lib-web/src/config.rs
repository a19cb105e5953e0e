//! # Server Configuration
//!
//! | Variable          | Default          | Meaning                                   |
//! |-------------------|------------------|-------------------------------------------|
//! | `BIND_ADDRESS`    | `127.0.0.1:8080` | listen address                            |
//! | `DIST_DIR`        | `dist`           | directory holding the built front-end     |
//! | `CSP_CONNECT_SRC` | *(empty)*        | extra `connect-src` origins, space/comma separated |
//! | `LOG_LEVEL`       | `info`           | tracing filter, read by [`init_tracing`](crate::init_tracing) |

use lib_utils::{get_env_list, get_env_or};
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_DIST_DIR: &str = "dist";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid bind address {0:?}")]
    InvalidBindAddress(String),

    #[error("invalid connect-src origin {0:?}")]
    InvalidConnectSource(String),
}

/// Static host configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080")
    pub bind_address: String,
    /// Built front-end (`index.html`, `pkg/`, `assets/`)
    pub dist_dir: PathBuf,
    /// Origins appended to `connect-src 'self'`
    pub connect_src: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            connect_src: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the environment (and `.env`, when
    /// present) and validate it.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Self {
            bind_address: get_env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            dist_dir: PathBuf::from(get_env_or("DIST_DIR", DEFAULT_DIST_DIR)),
            connect_src: get_env_list("CSP_CONNECT_SRC"),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::InvalidBindAddress(self.bind_address.clone()));
        }
        // Sources end up inside a header value; one stray `;` or quote would
        // inject a directive.
        if let Some(bad) = self.connect_src.iter().find(|src| !is_csp_source(src)) {
            return Err(ConfigError::InvalidConnectSource(bad.clone()));
        }
        Ok(())
    }
}

fn is_csp_source(src: &str) -> bool {
    !src.is_empty()
        && src
            .chars()
            .all(|c| c.is_ascii_graphic() && !matches!(c, ';' | ',' | '\'' | '"'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(ServerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        let config = ServerConfig {
            bind_address: "localhost".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidBindAddress("localhost".to_string()))
        );
    }

    #[test]
    fn test_rejects_directive_injection() {
        let config = ServerConfig {
            connect_src: vec![
                "https://rpc.example.org".to_string(),
                "https://x.io;script-src".to_string(),
            ],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConnectSource(_))
        ));
    }

    #[test]
    fn test_accepts_wildcard_and_ws_sources() {
        let config = ServerConfig {
            connect_src: vec!["https://*.infura.io".to_string(), "wss://relay.example.org".to_string()],
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
