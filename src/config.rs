//! Server configuration loaded from the environment.
//!
//! - `AIRPORT_ADMIN_HOST`: address to bind (default `0.0.0.0`)
//! - `AIRPORT_ADMIN_PORT`: port to bind (default `8080`)
//!
//! Log verbosity is controlled separately through `RUST_LOG`.

use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

pub const HOST_VAR: &str = "AIRPORT_ADMIN_HOST";
pub const PORT_VAR: &str = "AIRPORT_ADMIN_PORT";

/// Default bind address if not specified via environment variable.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port if not specified via environment variable.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("AIRPORT_ADMIN_PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("AIRPORT_ADMIN_HOST must be an IP address, got {0:?}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var(HOST_VAR).ok(), env::var(PORT_VAR).ok())
    }

    /// Build a configuration from raw variable values; `None` means unset.
    pub fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host.clone()))?;

        let port = match port {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_explicit_values() {
        let config =
            ServerConfig::from_vars(Some("127.0.0.1".to_string()), Some(" 9090 ".to_string()))
                .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_vars(None, Some("eighty".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "eighty"));

        let err = ServerConfig::from_vars(None, Some("70000".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn test_invalid_host() {
        let err = ServerConfig::from_vars(Some("airport.local".to_string()), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost(_)));
    }
}
