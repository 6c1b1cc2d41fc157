//! Caller-side state of a running quiz game.
//!
//! The service itself is stateless between requests. A client that
//! wants a full game loop carries one of these: it remembers the scope,
//! the ids already asked, and the score, and feeds the asked ids back
//! into each selection request.

use crate::question::QuestionId;
use crate::quiz::scope::QuizScope;
use std::collections::HashSet;

/// Lifecycle of a quiz game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizSessionState {
    /// Questions are still being served.
    Active,
    /// The eligible pool ran out. Terminal.
    Exhausted,
    /// The player stopped early. Terminal.
    UserEnded,
}

impl QuizSessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, QuizSessionState::Exhausted | QuizSessionState::UserEnded)
    }
}

/// A running quiz game.
///
/// Transitions only move away from [`QuizSessionState::Active`]; once a
/// session is terminal every mutator is a no-op.
#[derive(Debug, Clone)]
pub struct QuizSession {
    scope: QuizScope,
    asked: Vec<QuestionId>,
    correct: u32,
    state: QuizSessionState,
}

impl QuizSession {
    pub fn new(scope: QuizScope) -> Self {
        Self {
            scope,
            asked: Vec::new(),
            correct: 0,
            state: QuizSessionState::Active,
        }
    }

    pub fn scope(&self) -> QuizScope {
        self.scope
    }

    /// Ids already asked, in the order they were served.
    pub fn asked(&self) -> &[QuestionId] {
        &self.asked
    }

    /// Asked ids as the exclusion set for the next selection.
    pub fn previous_ids(&self) -> HashSet<QuestionId> {
        self.asked.iter().copied().collect()
    }

    pub fn answered(&self) -> u32 {
        self.asked.len() as u32
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn state(&self) -> QuizSessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Records a question as served.
    pub fn record_asked(&mut self, id: QuestionId) {
        if self.state == QuizSessionState::Active {
            self.asked.push(id);
        }
    }

    /// Records a correct answer to the most recent question.
    pub fn record_correct(&mut self) {
        if self.state == QuizSessionState::Active {
            self.correct += 1;
        }
    }

    /// The pool ran out of questions.
    pub fn mark_exhausted(&mut self) {
        if self.state == QuizSessionState::Active {
            self.state = QuizSessionState::Exhausted;
        }
    }

    /// The player stopped the game.
    pub fn end_by_user(&mut self) {
        if self.state == QuizSessionState::Active {
            self.state = QuizSessionState::UserEnded;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryId;

    fn session() -> QuizSession {
        QuizSession::new(QuizScope::All)
    }

    #[test]
    fn test_new_session_is_active_and_empty() {
        let s = session();
        assert_eq!(s.state(), QuizSessionState::Active);
        assert!(s.asked().is_empty());
        assert_eq!(s.correct(), 0);
        assert!(!s.is_over());
    }

    #[test]
    fn test_asked_ids_keep_order() {
        let mut s = session();
        s.record_asked(QuestionId::new(5));
        s.record_asked(QuestionId::new(2));
        s.record_asked(QuestionId::new(9));
        assert_eq!(
            s.asked(),
            &[QuestionId::new(5), QuestionId::new(2), QuestionId::new(9)]
        );
        assert_eq!(s.answered(), 3);
    }

    #[test]
    fn test_previous_ids_matches_asked() {
        let mut s = session();
        s.record_asked(QuestionId::new(5));
        s.record_asked(QuestionId::new(2));
        let previous = s.previous_ids();
        assert!(previous.contains(&QuestionId::new(5)));
        assert!(previous.contains(&QuestionId::new(2)));
        assert_eq!(previous.len(), 2);
    }

    #[test]
    fn test_score_tracking() {
        let mut s = session();
        s.record_asked(QuestionId::new(1));
        s.record_correct();
        s.record_asked(QuestionId::new(2));
        assert_eq!(s.correct(), 1);
        assert_eq!(s.answered(), 2);
    }

    #[test]
    fn test_exhausted_is_terminal() {
        let mut s = session();
        s.mark_exhausted();
        assert_eq!(s.state(), QuizSessionState::Exhausted);
        assert!(s.is_over());

        // No transition leaves a terminal state.
        s.end_by_user();
        assert_eq!(s.state(), QuizSessionState::Exhausted);
        s.record_asked(QuestionId::new(1));
        s.record_correct();
        assert!(s.asked().is_empty());
        assert_eq!(s.correct(), 0);
    }

    #[test]
    fn test_user_end_is_terminal() {
        let mut s = session();
        s.record_asked(QuestionId::new(1));
        s.end_by_user();
        assert_eq!(s.state(), QuizSessionState::UserEnded);
        assert!(s.is_over());

        s.mark_exhausted();
        assert_eq!(s.state(), QuizSessionState::UserEnded);
    }

    #[test]
    fn test_session_keeps_its_scope() {
        let scope = QuizScope::Category(CategoryId::new(3));
        let s = QuizSession::new(scope);
        assert_eq!(s.scope(), scope);
    }
}
