//! Create Question use case.
//!
//! Input validation happens once, when the caller builds the
//! [`QuestionDraft`]; by the time a draft reaches this use case it is
//! well-formed. The store assigns the id and is the one place
//! referential integrity is enforced.

use crate::ports::record_store::QuestionStore;
use std::sync::Arc;
use tracing::info;
use trivia_domain::{DomainError, Question, QuestionDraft};

/// Use case for adding a question to the catalog.
pub struct CreateQuestionUseCase {
    questions: Arc<dyn QuestionStore>,
}

impl CreateQuestionUseCase {
    pub fn new(questions: Arc<dyn QuestionStore>) -> Self {
        Self { questions }
    }

    pub async fn execute(&self, draft: QuestionDraft) -> Result<Question, DomainError> {
        let question = self.questions.insert(draft).await?;
        info!(id = %question.id(), category = %question.category_id(), "created question");
        Ok(question)
    }
}
