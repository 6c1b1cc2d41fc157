//! Infrastructure layer for trivia-server
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading
//! and the seed file that populates the in-memory store.

pub mod config;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileServerConfig,
    FileStoreConfig,
};
pub use store::{InMemoryTriviaStore, SeedData, SeedError, load_seed};
