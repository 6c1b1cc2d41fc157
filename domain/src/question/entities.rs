//! The stored question entity.

use crate::category::CategoryId;
use crate::question::value_objects::{Difficulty, QuestionDraft, QuestionId};
use serde::Serialize;

/// A trivia question held in the catalog.
///
/// Instances only come into existence with a store-assigned id, built
/// from an already-validated [`QuestionDraft`], so a `Question` is
/// well-formed by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    question_text: String,
    answer_text: String,
    category_id: CategoryId,
    difficulty: Difficulty,
}

impl Question {
    /// Assembles a question from a draft and the id the store assigned it.
    pub fn new(id: QuestionId, draft: QuestionDraft) -> Self {
        Self {
            id,
            category_id: draft.category_id(),
            difficulty: draft.difficulty(),
            question_text: draft.question_text().to_string(),
            answer_text: draft.answer_text().to_string(),
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
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

    /// Case-insensitive substring match against the question text.
    ///
    /// The empty term matches every question. Answer text is never
    /// searched.
    pub fn matches_term(&self, term: &str) -> bool {
        self.question_text
            .to_lowercase()
            .contains(&term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, text: &str) -> Question {
        let draft = QuestionDraft::new(text, "answer", CategoryId::new(1), 2)
            .expect("valid draft");
        Question::new(QuestionId::new(id), draft)
    }

    #[test]
    fn test_question_carries_draft_fields() {
        let draft = QuestionDraft::new("Who wrote Hamlet?", "Shakespeare", CategoryId::new(2), 3)
            .expect("valid draft");
        let q = Question::new(QuestionId::new(7), draft);
        assert_eq!(q.id(), QuestionId::new(7));
        assert_eq!(q.question_text(), "Who wrote Hamlet?");
        assert_eq!(q.answer_text(), "Shakespeare");
        assert_eq!(q.category_id(), CategoryId::new(2));
        assert_eq!(q.difficulty().as_u8(), 3);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let q = question(1, "Who painted the Mona Lisa?");
        assert!(q.matches_term("mona lisa"));
        assert!(q.matches_term("MONA"));
        assert!(q.matches_term("Painted"));
    }

    #[test]
    fn test_match_is_substring_not_word() {
        let q = question(1, "Who painted the Mona Lisa?");
        assert!(q.matches_term("ona Li"));
        assert!(!q.matches_term("Leonardo"));
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let q = question(1, "Who painted the Mona Lisa?");
        assert!(q.matches_term(""));
    }

    #[test]
    fn test_answer_text_is_not_searched() {
        let q = question(1, "Who painted the Mona Lisa?");
        assert!(!q.matches_term("answer"));
    }
}
