//! Record store adapters.
//!
//! - [`memory::InMemoryTriviaStore`] - The process-local store backing
//!   both store ports
//! - [`seed`] - TOML seed file loading and validation

pub mod memory;
pub mod seed;

pub use memory::InMemoryTriviaStore;
pub use seed::{SeedData, SeedError, load_seed};
