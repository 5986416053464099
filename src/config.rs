//! Configuration
//!
//! [`CreatorOptions`] tunes statement generation; [`ConnectionConfig`]
//! describes how to reach the MySQL server.

use std::fmt;

use crate::error::{Result, TableCreatorError};

/// Options for statement generation
#[derive(Debug, Clone, Default)]
pub struct CreatorOptions {
    /// Reject empty column names, which the column pattern alone lets
    /// through (default: false)
    pub reject_empty_column_names: bool,
}

impl CreatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable rejection of empty column names (default: false)
    pub fn reject_empty_column_names(mut self, enabled: bool) -> Self {
        self.reject_empty_column_names = enabled;
        self
    }
}

/// Environment variables read by [`ConnectionConfig::from_env`]
pub const ENV_HOST: &str = "DATABASE_IP";
pub const ENV_PORT: &str = "DATABASE_PORT";
pub const ENV_USERNAME: &str = "DATABASE_USERNAME";
pub const ENV_PASSWORD: &str = "DATABASE_PASSWORD";
pub const ENV_DATABASE: &str = "DATABASE_DATABASE";

const DEFAULT_PORT: u16 = 3306;

/// MySQL connection settings
#[derive(Clone)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

impl ConnectionConfig {
    /// Create a new configuration builder
    pub fn builder(
        host: impl Into<String>,
        username: impl Into<String>,
        database: impl Into<String>,
    ) -> ConnectionConfigBuilder {
        ConnectionConfigBuilder::new(host, username, database)
    }

    /// Read the configuration from the process environment
    ///
    /// All of `DATABASE_IP`, `DATABASE_PORT`, `DATABASE_USERNAME`,
    /// `DATABASE_PASSWORD` and `DATABASE_DATABASE` must be set and non-empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| {
                    TableCreatorError::config(format!(
                        "Missing environment variable {}",
                        key
                    ))
                })
        };

        let host = required(ENV_HOST)?;
        let port = required(ENV_PORT)?;
        let username = required(ENV_USERNAME)?;
        let password = required(ENV_PASSWORD)?;
        let database = required(ENV_DATABASE)?;

        let port = port.parse::<u16>().map_err(|e| {
            TableCreatorError::config(format!("Invalid {} '{}': {}", ENV_PORT, port, e))
        })?;

        Ok(Self::builder(host, username, database)
            .port(port)
            .password(password)
            .build())
    }
}

/// Builder for ConnectionConfig
#[derive(Debug)]
pub struct ConnectionConfigBuilder {
    host: String,
    port: u16,
    username: String,
    password: String,
    database: String,
}

impl ConnectionConfigBuilder {
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            username: username.into(),
            password: String::new(),
            database: database.into(),
        }
    }

    /// Set the server port (default: 3306)
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> ConnectionConfig {
        ConnectionConfig {
            host: self.host,
            port: self.port,
            username: self.username,
            password: self.password,
            database: self.database,
        }
    }
}
