//! CLI module
//!
//! Argument definitions for the trivia-server binary.

pub mod commands;
