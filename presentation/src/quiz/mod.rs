//! Interactive quiz module
//!
//! Provides a readline-based terminal quiz over the same store the
//! HTTP API serves.

mod repl;

pub use repl::QuizRepl;
