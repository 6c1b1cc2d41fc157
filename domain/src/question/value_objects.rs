//! Question value objects - identifiers and validated building blocks.
//!
//! # Identifiers
//! - [`QuestionId`] - Store-assigned identifier of a question
//!
//! # Attributes
//! - [`Difficulty`] - Positive difficulty rating
//!
//! # Input
//! - [`QuestionDraft`] - Validated payload for creating a question

use crate::category::CategoryId;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifier of a stored question.
///
/// Ids are assigned by the record store on insert and are never reused
/// within a store's lifetime, so a deleted id stays dangling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Creates a QuestionId from a raw number.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for QuestionId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty rating of a question. Always nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Creates a difficulty. Returns `None` for zero.
    pub fn try_new(value: u8) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Returns the raw rating.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated input for creating a question.
///
/// A draft carries everything a [`super::Question`] has except the id,
/// which the record store assigns. Construction is the single validation
/// point for question input: blank text, a zero category reference, or a
/// zero difficulty are rejected as [`DomainError::InvalidArgument`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDraft {
    question_text: String,
    answer_text: String,
    category_id: CategoryId,
    difficulty: Difficulty,
}

impl QuestionDraft {
    pub fn new(
        question_text: impl Into<String>,
        answer_text: impl Into<String>,
        category_id: CategoryId,
        difficulty: u8,
    ) -> Result<Self, DomainError> {
        let question_text = question_text.into();
        if question_text.trim().is_empty() {
            return Err(DomainError::invalid_argument("question text must not be empty"));
        }
        let answer_text = answer_text.into();
        if answer_text.trim().is_empty() {
            return Err(DomainError::invalid_argument("answer text must not be empty"));
        }
        if category_id.is_unset() {
            return Err(DomainError::invalid_argument(
                "category id must reference a category (zero is reserved)",
            ));
        }
        let difficulty = Difficulty::try_new(difficulty)
            .ok_or_else(|| DomainError::invalid_argument("difficulty must be nonzero"))?;
        Ok(Self {
            question_text,
            answer_text,
            category_id,
            difficulty,
        })
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn answer_text(&self) -> &str {
        &self.answer_text
    }

    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}
