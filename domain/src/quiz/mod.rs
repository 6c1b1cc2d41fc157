//! Quiz subdomain - non-repeating question selection and game tracking.
//!
//! - [`scope::QuizScope`] - Which part of the catalog a quiz draws from
//! - [`selection`] - Pure computation of the eligible pool
//! - [`session::QuizSession`] - Caller-side state of a running game

pub mod scope;
pub mod selection;
pub mod session;

pub use scope::QuizScope;
pub use selection::{QuizOutcome, excluding};
pub use session::{QuizSession, QuizSessionState};
