//! Process-local record store.
//!
//! One `RwLock` over two id-keyed `BTreeMap`s. The map ordering is the
//! "stable store order" the port contract asks for: listings always
//! come back ascending by id. The id counter only moves forward, so a
//! deleted id is never handed out again.
//!
//! Referential integrity is enforced on insert: a draft pointing at an
//! unknown category is rejected by the store, not by the use cases.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use trivia_application::ports::record_store::{CategoryStore, QuestionStore, StoreError};
use trivia_domain::{Category, CategoryId, Question, QuestionDraft, QuestionId};

use crate::store::seed::SeedData;

struct Tables {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    next_question_id: u64,
}

/// In-memory implementation of both store ports.
///
/// Wrap it in an `Arc` and hand the same instance out as
/// `Arc<dyn QuestionStore>` and `Arc<dyn CategoryStore>`.
pub struct InMemoryTriviaStore {
    inner: RwLock<Tables>,
}

impl InMemoryTriviaStore {
    /// A store with no categories and no questions.
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(Tables {
                categories: BTreeMap::new(),
                questions: BTreeMap::new(),
                next_question_id: 1,
            }),
        }
    }

    /// A store pre-populated from a validated seed. Freshly assigned
    /// ids continue above the largest seeded question id.
    pub fn from_seed(seed: SeedData) -> Self {
        let categories: BTreeMap<CategoryId, Category> = seed
            .categories
            .into_iter()
            .map(|category| (category.id(), category))
            .collect();
        let mut questions = BTreeMap::new();
        let mut max_id = 0u64;
        for question in seed.questions {
            max_id = max_id.max(question.id().as_u64());
            questions.insert(question.id(), question);
        }
        Self {
            inner: RwLock::new(Tables {
                categories,
                questions,
                next_question_id: max_id + 1,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl QuestionStore for InMemoryTriviaStore {
    async fn insert(&self, draft: QuestionDraft) -> Result<Question, StoreError> {
        let mut tables = self.write()?;
        if !tables.categories.contains_key(&draft.category_id()) {
            return Err(StoreError::Backend(format!(
                "question references unknown category {}",
                draft.category_id()
            )));
        }
        let id = QuestionId::new(tables.next_question_id);
        tables.next_question_id += 1;
        let question = Question::new(id, draft);
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn get_by_id(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: QuestionId) -> Result<bool, StoreError> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }

    async fn all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.read()?.questions.values().cloned().collect())
    }

    async fn by_category(&self, category_id: CategoryId) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|question| question.category_id() == category_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategoryStore for InMemoryTriviaStore {
    async fn all(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn get_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self.read()?.categories.get(&id).cloned())
    }
}
