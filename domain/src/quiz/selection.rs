//! Eligible-pool computation for quiz selection.
//!
//! Selection is deliberately split in two: this module computes the
//! eligible pool as a pure function, and the caller draws one member
//! uniformly at random. Keeping the randomness out of here makes the
//! exclusion rule directly testable.

use crate::question::{Question, QuestionId};
use serde::Serialize;
use std::collections::HashSet;

/// Outcome of asking a quiz for its next question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum QuizOutcome {
    /// A question not asked before in this game.
    Next(Question),
    /// Every in-scope question has already been asked.
    Exhausted,
}

impl QuizOutcome {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, QuizOutcome::Exhausted)
    }
}

/// Filters `pool` down to the questions whose ids are not in `previous`.
///
/// Unknown ids in `previous` exclude nothing. The relative order of the
/// surviving questions is preserved.
pub fn excluding(pool: Vec<Question>, previous: &HashSet<QuestionId>) -> Vec<Question> {
    pool.into_iter()
        .filter(|question| !previous.contains(&question.id()))
        .collect()
}
