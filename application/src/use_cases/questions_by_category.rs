//! Questions By Category use case.
//!
//! The full, unpaginated contents of one category. The zero id is the
//! "all categories" sentinel and is rejected here: a caller who wants
//! the whole catalog lists questions instead.
//!
//! A nonzero id with no questions returns an empty listing. The store
//! is not asked whether the category itself exists, so an unknown id
//! and an empty category are indistinguishable.

use crate::ports::record_store::QuestionStore;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{CategoryId, DomainError, Question};

/// One category's questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub category_id: CategoryId,
}

/// Use case for listing everything filed under one category.
pub struct QuestionsByCategoryUseCase {
    questions: Arc<dyn QuestionStore>,
}

impl QuestionsByCategoryUseCase {
    pub fn new(questions: Arc<dyn QuestionStore>) -> Self {
        Self { questions }
    }

    pub async fn execute(&self, category_id: CategoryId) -> Result<CategoryQuestions, DomainError> {
        if category_id.is_unset() {
            return Err(DomainError::invalid_argument(
                "category id must be nonzero (zero means no category)",
            ));
        }

        let questions = self.questions.by_category(category_id).await?;

        debug!(%category_id, count = questions.len(), "listed category questions");
        Ok(CategoryQuestions {
            total_questions: questions.len(),
            questions,
            category_id,
        })
    }
}
