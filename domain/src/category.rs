//! Category taxonomy - the fixed set of topics questions are filed under.
//!
//! - [`CategoryId`] - Numeric identifier; zero is reserved as the
//!   "all categories" sentinel and never names a real category
//! - [`Category`] - A taxonomy entry with a human-readable label

use serde::{Deserialize, Serialize};

/// Numeric identifier of a category.
///
/// Zero never identifies a stored category. Wire formats use it as the
/// "no category / all categories" sentinel, so a zero id can be carried
/// around but must not be dereferenced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    /// Creates a CategoryId from a raw number.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// True for the reserved zero id that names no category.
    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for CategoryId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A taxonomy entry.
///
/// Categories are read-only reference data: the service lists them and
/// files questions under them but never creates or deletes them at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    id: CategoryId,
    label: String,
}

impl Category {
    /// Creates a category. Returns `None` when the id is the reserved
    /// zero or the label is blank.
    pub fn try_new(id: CategoryId, label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        if id.is_unset() || label.trim().is_empty() {
            return None;
        }
        Some(Self { id, label })
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
