//! Shared in-memory fixtures for use case tests.
//!
//! `FixtureStore` is a plain `Mutex<Vec<..>>` implementation of both
//! store ports, just enough contract for the use cases: sequential id
//! assignment and stable listing order. `FailingStore` errors on every
//! call to exercise the store-failure path.

use crate::ports::record_store::{CategoryStore, QuestionStore, StoreError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use trivia_domain::{Category, CategoryId, Question, QuestionDraft, QuestionId};

pub(crate) struct FixtureStore {
    questions: Mutex<Vec<Question>>,
    categories: Mutex<Vec<Category>>,
    next_id: AtomicU64,
}

impl FixtureStore {
    pub(crate) fn empty() -> Arc<Self> {
        Arc::new(Self {
            questions: Mutex::new(Vec::new()),
            categories: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        })
    }

    /// Two categories (1 Science, 2 Art) and four questions, ids 1-4:
    /// three in Science, one in Art.
    pub(crate) fn with_fixtures() -> Arc<Self> {
        let store = Self::empty();
        store.push_category(1, "Science");
        store.push_category(2, "Art");
        store.push_question(1, "What planet is called the Red Planet?", "Mars", 1, 1);
        store.push_question(2, "What gas do plants breathe in?", "Carbon dioxide", 1, 2);
        store.push_question(3, "How many legs does a spider have?", "Eight", 1, 1);
        store.push_question(4, "Who painted the Mona Lisa?", "Da Vinci", 2, 2);
        store
    }

    pub(crate) fn push_category(&self, id: u64, label: &str) {
        let category = Category::try_new(CategoryId::new(id), label).expect("valid category");
        self.categories.lock().unwrap().push(category);
    }

    pub(crate) fn push_question(
        &self,
        id: u64,
        question: &str,
        answer: &str,
        category: u64,
        difficulty: u8,
    ) {
        let draft = QuestionDraft::new(question, answer, CategoryId::new(category), difficulty)
            .expect("valid draft");
        self.questions
            .lock()
            .unwrap()
            .push(Question::new(QuestionId::new(id), draft));
        // Keep assigned ids ahead of the fixtures.
        self.next_id.fetch_max(id + 1, Ordering::SeqCst);
    }

    pub(crate) fn question_count(&self) -> usize {
        self.questions.lock().unwrap().len()
    }
}

#[async_trait]
impl QuestionStore for FixtureStore {
    async fn insert(&self, draft: QuestionDraft) -> Result<Question, StoreError> {
        let id = QuestionId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let question = Question::new(id, draft);
        self.questions.lock().unwrap().push(question.clone());
        Ok(question)
    }

    async fn get_by_id(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id() == id)
            .cloned())
    }

    async fn delete_by_id(&self, id: QuestionId) -> Result<bool, StoreError> {
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id() != id);
        Ok(questions.len() < before)
    }

    async fn all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.questions.lock().unwrap().clone())
    }

    async fn by_category(&self, category_id: CategoryId) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.category_id() == category_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategoryStore for FixtureStore {
    async fn all(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id() == id)
            .cloned())
    }
}

/// Store whose every call fails, for testing failure propagation.
pub(crate) struct FailingStore;

impl FailingStore {
    fn err() -> StoreError {
        StoreError::Backend("injected failure".to_string())
    }
}

#[async_trait]
impl QuestionStore for FailingStore {
    async fn insert(&self, _draft: QuestionDraft) -> Result<Question, StoreError> {
        Err(Self::err())
    }

    async fn get_by_id(&self, _id: QuestionId) -> Result<Option<Question>, StoreError> {
        Err(Self::err())
    }

    async fn delete_by_id(&self, _id: QuestionId) -> Result<bool, StoreError> {
        Err(Self::err())
    }

    async fn all(&self) -> Result<Vec<Question>, StoreError> {
        Err(Self::err())
    }

    async fn by_category(&self, _category_id: CategoryId) -> Result<Vec<Question>, StoreError> {
        Err(Self::err())
    }
}

#[async_trait]
impl CategoryStore for FailingStore {
    async fn all(&self) -> Result<Vec<Category>, StoreError> {
        Err(Self::err())
    }

    async fn get_by_id(&self, _id: CategoryId) -> Result<Option<Category>, StoreError> {
        Err(Self::err())
    }
}
