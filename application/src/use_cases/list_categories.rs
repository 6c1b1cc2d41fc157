//! List Categories use case.
//!
//! Returns the whole taxonomy as an id-to-label map. An empty taxonomy
//! is a [`DomainError::NotFound`]: this service is not usable without
//! categories, so an unseeded store should fail loudly rather than
//! hand back an empty map.

use crate::ports::record_store::CategoryStore;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{CategoryId, DomainError};

/// The taxonomy keyed by id, ordered for stable output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub categories: BTreeMap<CategoryId, String>,
}

/// Use case for listing all categories.
pub struct ListCategoriesUseCase {
    categories: Arc<dyn CategoryStore>,
}

impl ListCategoriesUseCase {
    pub fn new(categories: Arc<dyn CategoryStore>) -> Self {
        Self { categories }
    }

    pub async fn execute(&self) -> Result<CategoryListing, DomainError> {
        let all = self.categories.all().await?;
        if all.is_empty() {
            return Err(DomainError::not_found("no categories configured"));
        }

        let categories: BTreeMap<CategoryId, String> = all
            .into_iter()
            .map(|category| (category.id(), category.label().to_string()))
            .collect();

        debug!(count = categories.len(), "listed categories");
        Ok(CategoryListing { categories })
    }
}
