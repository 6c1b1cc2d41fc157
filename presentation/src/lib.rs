//! Presentation layer for trivia-server
//!
//! This crate contains the HTTP API surface, CLI definitions, and the
//! interactive quiz REPL.

pub mod cli;
pub mod http;
pub mod quiz;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, AppState, router};
pub use quiz::QuizRepl;
