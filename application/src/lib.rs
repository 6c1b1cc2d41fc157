//! Application layer for trivia-server
//!
//! This crate contains use cases and port definitions. It depends only
//! on the domain layer; adapters for the ports live in infrastructure.
//!
//! Each catalog and quiz operation is one use case struct holding
//! `Arc<dyn Store>` ports. All of them surface failures as
//! [`trivia_domain::DomainError`], the service-wide taxonomy.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::record_store::{CategoryStore, QuestionStore, StoreError};
pub use use_cases::create_question::CreateQuestionUseCase;
pub use use_cases::delete_question::DeleteQuestionUseCase;
pub use use_cases::list_categories::{CategoryListing, ListCategoriesUseCase};
pub use use_cases::list_questions::{ListQuestionsUseCase, QuestionPage};
pub use use_cases::next_question::{NextQuestionInput, NextQuestionUseCase};
pub use use_cases::questions_by_category::{CategoryQuestions, QuestionsByCategoryUseCase};
pub use use_cases::search_questions::{SearchQuestionsUseCase, SearchResults};
