//! Search Questions use case.
//!
//! Case-insensitive substring search over question text. The match
//! rule itself lives on [`Question::matches_term`]; this use case just
//! applies it across the catalog. Results are never paginated and the
//! empty term matches everything.

use crate::ports::record_store::QuestionStore;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{DomainError, Question};

/// All questions matching a search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Use case for searching question text.
pub struct SearchQuestionsUseCase {
    questions: Arc<dyn QuestionStore>,
}

impl SearchQuestionsUseCase {
    pub fn new(questions: Arc<dyn QuestionStore>) -> Self {
        Self { questions }
    }

    pub async fn execute(&self, term: &str) -> Result<SearchResults, DomainError> {
        let questions: Vec<Question> = self
            .questions
            .all()
            .await?
            .into_iter()
            .filter(|question| question.matches_term(term))
            .collect();

        debug!(term, matched = questions.len(), "searched questions");
        Ok(SearchResults {
            total_questions: questions.len(),
            questions,
        })
    }
}
