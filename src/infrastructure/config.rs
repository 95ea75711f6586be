//! Layered service configuration.
//!
//! Values are resolved from built-in defaults, then an optional
//! `taskboard.toml` in the working directory, then environment variables
//! prefixed with `TASKBOARD` using `__` as the section separator
//! (for example `TASKBOARD__SERVER__PORT=9000`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "TASKBOARD";

/// Base name of the optional configuration file.
pub const CONFIG_FILE: &str = "taskboard";

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// HTTP listener settings.
    pub server: ServerSettings,
    /// Logging settings.
    pub log: LogSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: IpAddr,
    /// TCP port to bind.
    pub port: u16,
}

impl ServerSettings {
    /// Returns the socket address to listen on.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Output format for log records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per record.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogSettings {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Settings {
    /// Loads settings from defaults, the optional config file, and the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be read or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(Environment::with_prefix(ENV_PREFIX).separator("__")),
        )
    }

    /// Returns the built-in defaults with no external sources applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] only if the defaults themselves are invalid.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder())
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("log.level", "info")?
            .set_default("log.format", "pretty")?
            .build()?
            .try_deserialize()
    }
}
