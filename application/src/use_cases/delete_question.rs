//! Delete Question use case.
//!
//! Permanent removal by id. The confirmed id is returned so transports
//! can echo exactly what was removed; deleting an absent id is
//! [`DomainError::NotFound`].

use crate::ports::record_store::QuestionStore;
use std::sync::Arc;
use tracing::info;
use trivia_domain::{DomainError, QuestionId};

/// Use case for removing a question from the catalog.
pub struct DeleteQuestionUseCase {
    questions: Arc<dyn QuestionStore>,
}

impl DeleteQuestionUseCase {
    pub fn new(questions: Arc<dyn QuestionStore>) -> Self {
        Self { questions }
    }

    pub async fn execute(&self, id: QuestionId) -> Result<QuestionId, DomainError> {
        let removed = self.questions.delete_by_id(id).await?;
        if !removed {
            return Err(DomainError::not_found(format!("question {id} does not exist")));
        }
        info!(%id, "deleted question");
        Ok(id)
    }
}
