//! TOML seed file loading.
//!
//! A seed file carries the category taxonomy and an initial question
//! catalog:
//!
//! ```toml
//! [[categories]]
//! id = 1
//! label = "Science"
//!
//! [[questions]]
//! id = 1
//! question = "What planet is known as the Red Planet?"
//! answer = "Mars"
//! category = 1
//! difficulty = 1
//! ```
//!
//! Loading validates the whole file up front: duplicate ids, zero ids,
//! blank text, and dangling category references are all rejected before
//! anything reaches the store, so a running store never holds a record
//! that violates the domain invariants.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use trivia_domain::{Category, CategoryId, Question, QuestionDraft, QuestionId};

/// Errors raised while loading a seed file.
#[derive(thiserror::Error, Debug)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("category {id} is invalid: {reason}")]
    InvalidCategory { id: u64, reason: String },

    #[error("duplicate category id {0}")]
    DuplicateCategory(u64),

    #[error("question {id} is invalid: {reason}")]
    InvalidQuestion { id: u64, reason: String },

    #[error("duplicate question id {0}")]
    DuplicateQuestion(u64),

    #[error("question {id} references unknown category {category}")]
    UnknownCategory { id: u64, category: u64 },
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    categories: Vec<SeedCategory>,
    #[serde(default)]
    questions: Vec<SeedQuestion>,
}

#[derive(Debug, Deserialize)]
struct SeedCategory {
    id: u64,
    label: String,
}

#[derive(Debug, Deserialize)]
struct SeedQuestion {
    id: u64,
    question: String,
    answer: String,
    category: u64,
    difficulty: u8,
}

/// Validated seed contents, ready for
/// [`InMemoryTriviaStore::from_seed`](crate::store::memory::InMemoryTriviaStore::from_seed).
#[derive(Debug)]
pub struct SeedData {
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
}

/// Reads and validates a seed file.
pub fn load_seed(path: &Path) -> Result<SeedData, SeedError> {
    let text = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: SeedFile = toml::from_str(&text).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let data = validate(file)?;
    debug!(
        path = %path.display(),
        categories = data.categories.len(),
        questions = data.questions.len(),
        "seed file loaded"
    );
    Ok(data)
}

fn validate(file: SeedFile) -> Result<SeedData, SeedError> {
    let mut category_ids: BTreeSet<u64> = BTreeSet::new();
    let mut categories = Vec::with_capacity(file.categories.len());
    for entry in file.categories {
        if !category_ids.insert(entry.id) {
            return Err(SeedError::DuplicateCategory(entry.id));
        }
        let category = Category::try_new(CategoryId::new(entry.id), &entry.label).ok_or_else(
            || SeedError::InvalidCategory {
                id: entry.id,
                reason: "id must be nonzero and label must not be blank".to_string(),
            },
        )?;
        categories.push(category);
    }

    let mut question_ids: BTreeSet<u64> = BTreeSet::new();
    let mut questions = Vec::with_capacity(file.questions.len());
    for entry in file.questions {
        if !question_ids.insert(entry.id) {
            return Err(SeedError::DuplicateQuestion(entry.id));
        }
        if !category_ids.contains(&entry.category) {
            return Err(SeedError::UnknownCategory {
                id: entry.id,
                category: entry.category,
            });
        }
        let draft = QuestionDraft::new(
            entry.question,
            entry.answer,
            CategoryId::new(entry.category),
            entry.difficulty,
        )
        .map_err(|err| SeedError::InvalidQuestion {
            id: entry.id,
            reason: err.to_string(),
        })?;
        questions.push(Question::new(QuestionId::new(entry.id), draft));
    }

    Ok(SeedData {
        categories,
        questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GOOD_SEED: &str = r#"
[[categories]]
id = 1
label = "Science"

[[categories]]
id = 2
label = "Art"

[[questions]]
id = 1
question = "What planet is known as the Red Planet?"
answer = "Mars"
category = 1
difficulty = 1

[[questions]]
id = 2
question = "Who painted the Mona Lisa?"
answer = "Da Vinci"
category = 2
difficulty = 2
"#;

    fn parse(text: &str) -> Result<SeedData, SeedError> {
        validate(toml::from_str(text).expect("parseable toml"))
    }

    #[test]
    fn test_good_seed_validates() {
        let data = parse(GOOD_SEED).unwrap();
        assert_eq!(data.categories.len(), 2);
        assert_eq!(data.questions.len(), 2);
        assert_eq!(data.questions[0].answer_text(), "Mars");
        assert_eq!(data.questions[1].category_id(), CategoryId::new(2));
    }

    #[test]
    fn test_empty_file_is_a_valid_empty_seed() {
        let data = parse("").unwrap();
        assert!(data.categories.is_empty());
        assert!(data.questions.is_empty());
    }

    #[test]
    fn test_duplicate_category_id_rejected() {
        let text = r#"
[[categories]]
id = 1
label = "Science"

[[categories]]
id = 1
label = "Art"
"#;
        assert!(matches!(
            parse(text).unwrap_err(),
            SeedError::DuplicateCategory(1)
        ));
    }

    #[test]
    fn test_zero_category_id_rejected() {
        let text = r#"
[[categories]]
id = 0
label = "Science"
"#;
        assert!(matches!(
            parse(text).unwrap_err(),
            SeedError::InvalidCategory { id: 0, .. }
        ));
    }

    #[test]
    fn test_dangling_category_reference_rejected() {
        let text = r#"
[[categories]]
id = 1
label = "Science"

[[questions]]
id = 1
question = "q"
answer = "a"
category = 9
difficulty = 1
"#;
        assert!(matches!(
            parse(text).unwrap_err(),
            SeedError::UnknownCategory { id: 1, category: 9 }
        ));
    }

    #[test]
    fn test_invalid_question_rejected_with_reason() {
        let text = r#"
[[categories]]
id = 1
label = "Science"

[[questions]]
id = 3
question = "q"
answer = "a"
category = 1
difficulty = 0
"#;
        match parse(text).unwrap_err() {
            SeedError::InvalidQuestion { id, reason } => {
                assert_eq!(id, 3);
                assert!(reason.contains("difficulty"));
            }
            other => panic!("expected InvalidQuestion, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_question_id_rejected() {
        let text = r#"
[[categories]]
id = 1
label = "Science"

[[questions]]
id = 1
question = "q"
answer = "a"
category = 1
difficulty = 1

[[questions]]
id = 1
question = "q2"
answer = "a2"
category = 1
difficulty = 1
"#;
        assert!(matches!(
            parse(text).unwrap_err(),
            SeedError::DuplicateQuestion(1)
        ));
    }

    #[test]
    fn test_load_seed_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GOOD_SEED.as_bytes()).unwrap();

        let data = load_seed(file.path()).unwrap();
        assert_eq!(data.categories.len(), 2);
        assert_eq!(data.questions.len(), 2);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_seed(Path::new("/nonexistent/trivia-seed.toml")).unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[[categories\nid = 1").unwrap();

        let err = load_seed(file.path()).unwrap_err();
        assert!(matches!(err, SeedError::Parse { .. }));
    }
}
