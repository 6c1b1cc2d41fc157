//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section and field has a default, so an empty or absent file is
//! a fully valid configuration.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Address served when nothing else is configured.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("server.bind '{value}' is not a valid socket address: {source}")]
    InvalidBind {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Record store settings
    pub store: FileStoreConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
}

/// Raw server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address to listen on, e.g. "127.0.0.1:5000"
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

/// Raw store configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Seed file with the category taxonomy and initial questions.
    /// Absent means the store starts empty.
    pub seed: Option<PathBuf>,
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl FileConfig {
    /// Validate the configuration.
    ///
    /// The only field with internal structure is `server.bind`; paths
    /// are checked when they are opened, not here.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.bind_addr()?;
        Ok(())
    }

    /// The configured bind address, parsed.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigValidationError> {
        self.server
            .bind
            .parse()
            .map_err(|source| ConfigValidationError::InvalidBind {
                value: self.server.bind.clone(),
                source,
            })
    }
}
