//! Configuration file loading for trivia-server
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./trivia.toml` or `./.trivia.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/trivia-server/config.toml`
//! 4. Fallback: `~/.config/trivia-server/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BIND, FileConfig, FileLoggingConfig, FileServerConfig,
    FileStoreConfig,
};
pub use loader::ConfigLoader;
