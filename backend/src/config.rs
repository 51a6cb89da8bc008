//! Server configuration read from the environment.
//!
//! Every setting has a default that works for local development, so the
//! backend starts with no environment at all.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;

pub const BIND_ADDR_VAR: &str = "EARNINGS_BIND_ADDR";
pub const CORS_ORIGIN_VAR: &str = "EARNINGS_CORS_ORIGIN";
pub const STATIC_DIR_VAR: &str = "EARNINGS_STATIC_DIR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a socket address like 127.0.0.1:3000, got '{value}'")]
    InvalidBindAddr { var: &'static str, value: String },
    #[error("{var} is not a valid origin header value: '{value}'")]
    InvalidCorsOrigin { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
    /// Origin allowed to call the API from the browser
    pub cors_origin: HeaderValue,
    /// Directory with the built frontend, served for non-API paths
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a key lookup, falling back to defaults for
    /// missing or blank keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr_raw = read(BIND_ADDR_VAR, DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: bind_addr_raw.clone(),
            })?;

        let cors_origin_raw = read(CORS_ORIGIN_VAR, DEFAULT_CORS_ORIGIN);
        let cors_origin = cors_origin_raw
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::InvalidCorsOrigin {
                var: CORS_ORIGIN_VAR,
                value: cors_origin_raw.clone(),
            })?;

        let static_dir = PathBuf::from(read(STATIC_DIR_VAR, DEFAULT_STATIC_DIR));

        Ok(Self {
            bind_addr,
            cors_origin,
            static_dir,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cors_origin: HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}
