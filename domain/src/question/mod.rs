//! Question catalog subdomain.
//!
//! - [`entities::Question`] - A stored trivia question
//! - [`value_objects::QuestionDraft`] - Validated input for creating one
//! - [`paging`] - Fixed-size pagination over catalog listings

pub mod entities;
pub mod paging;
pub mod value_objects;

pub use entities::Question;
pub use paging::{Page, QUESTIONS_PER_PAGE, page_slice};
pub use value_objects::{Difficulty, QuestionDraft, QuestionId};
