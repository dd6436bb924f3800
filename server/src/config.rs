//! Startup configuration read from the environment.
//!
//! | Variable   | Default                                      |
//! |------------|----------------------------------------------|
//! | `HOST`     | `127.0.0.1`                                  |
//! | `PORT`     | `3000`                                       |
//! | `RUST_LOG` | `todo_server=info,todo_core=info,tower=warn` |

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "todo_server=info,todo_core=info,tower=warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
}

/// A variable was set to something that does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { var, value } => {
                write!(f, "invalid value for {var}: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source. Unset or empty
    /// variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(value) = get("HOST") {
            config.host = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "HOST", value })?;
        }
        if let Some(value) = get("PORT") {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value })?;
        }
        if let Some(value) = get("RUST_LOG") {
            config.log_filter = value;
        }
        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
