//! Record store ports
//!
//! Defines the persistence interface the use cases run against. One
//! adapter typically implements both traits over the same backing
//! store.
//!
//! Contract notes:
//! - `insert` assigns the id; ids are never reused within a store's
//!   lifetime, even after deletion
//! - the question listings come back in stable store order, so
//!   pagination over an unchanged catalog is reproducible
//! - referential integrity (a question's category exists) is the
//!   store's responsibility; use cases do not re-check it

use async_trait::async_trait;
use thiserror::Error;
use trivia_domain::{Category, CategoryId, DomainError, Question, QuestionDraft, QuestionId};

/// Errors that can occur inside a record store adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),

    #[error("store lock poisoned")]
    Poisoned,
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::store_failure(err.to_string())
    }
}

/// Persistence port for the question catalog.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Assigns a fresh id, persists the draft, and returns the stored
    /// question. Never partially applies.
    async fn insert(&self, draft: QuestionDraft) -> Result<Question, StoreError>;

    async fn get_by_id(&self, id: QuestionId) -> Result<Option<Question>, StoreError>;

    /// Removes a question. Returns `false` when no question had the id.
    async fn delete_by_id(&self, id: QuestionId) -> Result<bool, StoreError>;

    /// Every question, in stable store order.
    async fn all(&self) -> Result<Vec<Question>, StoreError>;

    /// Every question filed under `category_id`, in stable store order.
    async fn by_category(&self, category_id: CategoryId) -> Result<Vec<Question>, StoreError>;
}

/// Persistence port for the category taxonomy. Read-only: categories
/// are fixed reference data.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Every category, in stable store order.
    async fn all(&self) -> Result<Vec<Category>, StoreError>;

    async fn get_by_id(&self, id: CategoryId) -> Result<Option<Category>, StoreError>;
}
