//! List Questions use case.
//!
//! One page of the catalog plus the counts and taxonomy a browsing
//! client renders alongside it. `total_questions` always counts the
//! whole catalog, not the returned page.
//!
//! Nothing here is an error short of the store failing: a page past
//! the end of the catalog comes back empty, and an unseeded taxonomy
//! is an empty map (unlike `list_categories`, which treats that as
//! missing).

use crate::ports::record_store::{CategoryStore, QuestionStore};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{CategoryId, DomainError, Page, Question, page_slice};

/// One listing window with catalog-wide context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<CategoryId, String>,
}

/// Use case for listing questions page by page.
pub struct ListQuestionsUseCase {
    questions: Arc<dyn QuestionStore>,
    categories: Arc<dyn CategoryStore>,
}

impl ListQuestionsUseCase {
    pub fn new(questions: Arc<dyn QuestionStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self {
            questions,
            categories,
        }
    }

    pub async fn execute(&self, page: Page) -> Result<QuestionPage, DomainError> {
        let (all_questions, all_categories) =
            tokio::try_join!(self.questions.all(), self.categories.all())?;

        let total_questions = all_questions.len();
        let questions = page_slice(&all_questions, page).to_vec();
        let categories: BTreeMap<CategoryId, String> = all_categories
            .into_iter()
            .map(|category| (category.id(), category.label().to_string()))
            .collect();

        debug!(
            ?page,
            returned = questions.len(),
            total = total_questions,
            "listed questions"
        );
        Ok(QuestionPage {
            questions,
            total_questions,
            categories,
        })
    }
}
