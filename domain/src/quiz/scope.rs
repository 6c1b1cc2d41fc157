//! Quiz scope - which slice of the catalog a quiz draws from.

use crate::category::CategoryId;
use crate::question::Question;
use serde::Serialize;

/// The pool constraint of a quiz.
///
/// Built from a raw category id where zero is the "all categories"
/// sentinel, so the `Category` variant always holds a nonzero id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuizScope {
    /// Draw from the whole catalog.
    All,
    /// Draw from a single category.
    Category(CategoryId),
}

impl QuizScope {
    /// Maps a raw category id to a scope, folding the zero sentinel
    /// into [`QuizScope::All`].
    pub fn from_category_id(id: CategoryId) -> Self {
        if id.is_unset() {
            QuizScope::All
        } else {
            QuizScope::Category(id)
        }
    }

    /// Whether a question falls inside this scope.
    pub fn admits(&self, question: &Question) -> bool {
        match self {
            QuizScope::All => true,
            QuizScope::Category(id) => question.category_id() == *id,
        }
    }
}
