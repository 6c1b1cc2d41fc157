//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: the three-kind failure taxonomy every
//!   operation reports through

pub mod error;
