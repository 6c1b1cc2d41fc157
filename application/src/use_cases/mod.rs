//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod create_question;
pub mod delete_question;
pub mod list_categories;
pub mod list_questions;
pub mod next_question;
pub mod questions_by_category;
pub mod search_questions;

#[cfg(test)]
pub(crate) mod test_fixtures;
