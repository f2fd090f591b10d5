//! Environment-backed configuration.
//!
//! The two secrets are required. Everything else has defaults and can be overridden with
//! `ORACLE_*` environment variables. The configuration is read once at startup and handed to
//! the gateway; request handling never touches the environment.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::fmt;
use std::net::IpAddr;

use crate::constants::{DEFAULT_OPENAI_BASE_URL, DEFAULT_PORT};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read overrides on top of defaults, then [`Config::validate`].
#[derive(Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Secret callers must present as `Authorization: Bearer <key>`.
    pub api_key: String,

    /// Secret used to authenticate against the upstream chat-completion API.
    pub openai_api_key: String,

    /// Upstream API root, without trailing slash. Default: `https://api.openai.com/v1`.
    pub openai_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            api_key: String::new(),
            openai_api_key: String::new(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("bind_addr", &self.bind_addr)
            .field("api_key", &"<redacted>")
            .field("openai_api_key", &"<redacted>")
            .field("openai_base_url", &self.openai_base_url)
            .finish()
    }
}

impl Config {
    const ENV_API_KEY: &'static str = "MRE_API_KEY";
    const ENV_OPENAI_API_KEY: &'static str = "OPENAI_API_KEY";
    const ENV_PORT: &'static str = "ORACLE_PORT";
    const ENV_BIND_ADDR: &'static str = "ORACLE_BIND_ADDR";
    const ENV_OPENAI_BASE_URL: &'static str = "ORACLE_OPENAI_BASE_URL";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let api_key = Self::require_env(Self::ENV_API_KEY)?;
        let openai_api_key = Self::require_env(Self::ENV_OPENAI_API_KEY)?;
        let openai_base_url =
            Self::parse_string_from_env(Self::ENV_OPENAI_BASE_URL, defaults.openai_base_url)
                .trim_end_matches('/')
                .to_string();

        Ok(Self {
            port,
            bind_addr,
            api_key,
            openai_api_key,
            openai_base_url,
        })
    }

    /// Checks secrets are non-empty and the upstream URL is HTTP(S).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::EmptySecret {
                name: Self::ENV_API_KEY,
            });
        }

        if self.openai_api_key.trim().is_empty() {
            return Err(ConfigError::EmptySecret {
                name: Self::ENV_OPENAI_API_KEY,
            });
        }

        if !(self.openai_base_url.starts_with("https://")
            || self.openai_base_url.starts_with("http://"))
        {
            return Err(ConfigError::InvalidBaseUrl {
                value: self.openai_base_url.clone(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn require_env(name: &'static str) -> Result<String, ConfigError> {
        env::var(name).map_err(|_| ConfigError::MissingEnvVar { name })
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }
}
