//! Next Question use case.
//!
//! Serves one quiz question at a time without repetition. The work is
//! split in two: the eligible pool is computed by pure domain code
//! ([`excluding`] over the scoped listing), then one member is drawn
//! uniformly at random here. An empty pool is the normal end of a
//! game, reported as [`QuizOutcome::Exhausted`] rather than an error.

use crate::ports::record_store::QuestionStore;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{DomainError, QuestionId, QuizOutcome, QuizScope, excluding};

/// Input for the [`NextQuestionUseCase`].
#[derive(Debug, Clone)]
pub struct NextQuestionInput {
    /// Ids already served in this game. Order and duplicates are
    /// irrelevant; unknown ids are ignored.
    pub previous: Vec<QuestionId>,
    /// Which slice of the catalog the game draws from.
    pub scope: QuizScope,
}

impl NextQuestionInput {
    pub fn new(previous: Vec<QuestionId>, scope: QuizScope) -> Self {
        Self { previous, scope }
    }
}

/// Use case for drawing the next quiz question.
pub struct NextQuestionUseCase {
    questions: Arc<dyn QuestionStore>,
}

impl NextQuestionUseCase {
    pub fn new(questions: Arc<dyn QuestionStore>) -> Self {
        Self { questions }
    }

    pub async fn execute(&self, input: NextQuestionInput) -> Result<QuizOutcome, DomainError> {
        let pool = match input.scope {
            QuizScope::All => self.questions.all().await?,
            QuizScope::Category(id) => self.questions.by_category(id).await?,
        };

        let previous: HashSet<QuestionId> = input.previous.iter().copied().collect();
        let eligible = excluding(pool, &previous);
        debug!(
            scope = ?input.scope,
            excluded = previous.len(),
            eligible = eligible.len(),
            "computed quiz pool"
        );

        match eligible.choose(&mut rand::thread_rng()) {
            Some(question) => Ok(QuizOutcome::Next(question.clone())),
            None => Ok(QuizOutcome::Exhausted),
        }
    }
}
