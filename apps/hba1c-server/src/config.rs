//! Layered server configuration.
//!
//! Sources, later ones winning:
//! 1) defaults -> 2) YAML file (if provided) -> 3) env (`APP__*`) -> 4) `PORT` -> 5) CLI overrides

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `APP__SERVER__BIND_ADDR`.
pub const ENV_PREFIX: &str = "APP__";

/// Listen port variable set by container and function platforms.
pub const PORT_ENV: &str = "PORT";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to load config: {0}")]
    Load(#[from] Box<figment::Error>),
    #[error("invalid PORT value '{value}': {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid bind address '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        #[source]
        source: AddrParseError,
    },
    #[error("failed to render config as YAML: {0}")]
    Render(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_owned(),
            port: 8080,
            request_timeout_secs: 30,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// Resolve `bind_addr` and `port` into a socket address.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidBindAddr` if `bind_addr` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .bind_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                addr: self.bind_addr.clone(),
                source,
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Load the full layered configuration, including the `PORT` variable.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file is missing, a source fails to parse,
    /// `PORT` is not a port number, or the bind address is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::load_layered(path)?;
        config.apply_port_override(std::env::var(PORT_ENV).ok().as_deref())?;
        config.server.socket_addr()?;
        Ok(config)
    }

    /// Defaults, then the YAML file, then `APP__*` environment variables.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file is missing or a source fails to parse.
    pub fn load_layered(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Apply a raw `PORT` value; empty or absent leaves the port unchanged.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidPort` if the value is not a valid port.
    pub fn apply_port_override(&mut self, raw: Option<&str>) -> Result<(), ConfigError> {
        let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(());
        };
        self.server.port = value.parse().map_err(|source| ConfigError::InvalidPort {
            value: value.to_owned(),
            source,
        })?;
        Ok(())
    }

    /// Apply command line overrides: `--port` and `-v` verbosity.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8) {
        if let Some(port) = port {
            self.server.port = port;
        }
        match verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    /// Returns `ConfigError::Render` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self).map_err(|e| ConfigError::Render(e.to_string()))
    }
}
