//! Domain layer for trivia-server
//!
//! This crate contains the core entities, value objects, and decision logic
//! for the trivia question service. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! The question catalog pairs a fixed taxonomy of [`category::Category`]
//! records with a mutable collection of [`question::Question`] records.
//! Catalog reads are paginated in fixed windows of
//! [`question::QUESTIONS_PER_PAGE`].
//!
//! ## Quiz
//!
//! A quiz walks the catalog one question at a time without repetition.
//! Selection is split in two: a pure computation of the eligible pool
//! ([`quiz::excluding`]) and a uniform draw performed by the caller.
//! [`quiz::QuizSession`] tracks a running game on the caller's side.

pub mod category;
pub mod core;
pub mod question;
pub mod quiz;

// Re-export commonly used types
pub use category::{Category, CategoryId};
pub use core::error::{DomainError, ErrorKind};
pub use question::{
    Difficulty, Page, QUESTIONS_PER_PAGE, Question, QuestionDraft, QuestionId, page_slice,
};
pub use quiz::{QuizOutcome, QuizScope, QuizSession, QuizSessionState, excluding};
