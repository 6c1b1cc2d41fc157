//! Request and response payloads for the HTTP API.
//!
//! One serde struct per operation, with named and typed fields; a
//! missing or mismatched field fails extraction and surfaces as the
//! standard 400 body. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trivia_domain::{CategoryId, Question};

/// Taxonomy as an id-to-label map. Serializes as a JSON object whose
/// keys are the ids rendered as strings.
pub type CategoryMap = BTreeMap<CategoryId, String>;

// ==================== Shared shapes ====================

/// Wire form of a stored question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    pub id: u64,
    pub question_text: String,
    pub answer_text: String,
    pub category_id: u64,
    pub difficulty: u8,
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        Self {
            id: question.id().as_u64(),
            question_text: question.question_text().to_string(),
            answer_text: question.answer_text().to_string(),
            category_id: question.category_id().as_u64(),
            difficulty: question.difficulty().as_u8(),
        }
    }
}

pub fn question_dtos(questions: Vec<Question>) -> Vec<QuestionDto> {
    questions.into_iter().map(QuestionDto::from).collect()
}

// ==================== Requests ====================

/// Body of `POST /questions`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    pub question_text: String,
    pub answer_text: String,
    pub category_id: u64,
    pub difficulty: u8,
}

/// Body of `POST /search`. An absent term searches for everything.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: String,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRequest {
    /// Ids already served this game; absent means a fresh game.
    #[serde(default)]
    pub previous_question_ids: Vec<u64>,
    pub quiz_category: QuizCategoryDto,
}

/// The category constraint of a quiz request. Clients send the label
/// along with the id; only the id matters here.
#[derive(Debug, Deserialize)]
pub struct QuizCategoryDto {
    pub id: LenientCategoryId,
    #[serde(rename = "type", default)]
    pub label: Option<String>,
}

/// Category id that tolerates the two encodings clients actually send:
/// a JSON number or a numeric string ("3"). Anything else is rejected
/// at extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LenientCategoryId(u64);

impl LenientCategoryId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for LenientCategoryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = LenientCategoryId;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a category id as a number or numeric string")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(LenientCategoryId(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u64::try_from(value).map(LenientCategoryId).map_err(|_| {
                    E::custom(format!("category id must not be negative, got {value}"))
                })
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.trim().parse::<u64>().map(LenientCategoryId).map_err(|_| {
                    E::custom(format!("category id must be numeric, got '{value}'"))
                })
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

// ==================== Responses ====================

/// Body of `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

/// Body of `GET /questions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

/// Body of `POST /search`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
}

/// Body of `GET /categories/{id}/questions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub current_category: u64,
}

/// Body of `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: u64,
}

/// Body of `POST /questions`.
#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub question: QuestionDto,
}

/// Body of `POST /quizzes`. `question` is null once the game is
/// exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Option<QuestionDto>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_domain::{QuestionDraft, QuestionId};

    fn question() -> Question {
        let draft = QuestionDraft::new(
            "What is the largest ocean?",
            "The Pacific",
            CategoryId::new(3),
            2,
        )
        .expect("valid draft");
        Question::new(QuestionId::new(9), draft)
    }

    #[test]
    fn test_question_serializes_camel_case() {
        let dto = QuestionDto::from(question());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 9,
                "questionText": "What is the largest ocean?",
                "answerText": "The Pacific",
                "categoryId": 3,
                "difficulty": 2,
            })
        );
    }

    #[test]
    fn test_category_map_keys_become_strings() {
        let mut categories = CategoryMap::new();
        categories.insert(CategoryId::new(1), "Science".to_string());
        categories.insert(CategoryId::new(2), "Art".to_string());

        let json = serde_json::to_string(&CategoriesResponse { categories }).unwrap();
        assert_eq!(json, r#"{"categories":{"1":"Science","2":"Art"}}"#);
    }

    #[test]
    fn test_create_request_requires_every_field() {
        let missing_answer = r#"{
            "questionText": "q",
            "categoryId": 1,
            "difficulty": 1
        }"#;
        assert!(serde_json::from_str::<CreateQuestionRequest>(missing_answer).is_err());

        let complete = r#"{
            "questionText": "q",
            "answerText": "a",
            "categoryId": 1,
            "difficulty": 1
        }"#;
        let request: CreateQuestionRequest = serde_json::from_str(complete).unwrap();
        assert_eq!(request.category_id, 1);
    }

    #[test]
    fn test_search_term_defaults_to_empty() {
        let request: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.search_term, "");
    }

    #[test]
    fn test_quiz_category_id_accepts_number_and_numeric_string() {
        let numeric = r#"{"previousQuestionIds": [1, 2], "quizCategory": {"id": 3, "type": "Geography"}}"#;
        let request: QuizRequest = serde_json::from_str(numeric).unwrap();
        assert_eq!(request.quiz_category.id.as_u64(), 3);
        assert_eq!(request.previous_question_ids, vec![1, 2]);

        let stringy = r#"{"quizCategory": {"id": "3"}}"#;
        let request: QuizRequest = serde_json::from_str(stringy).unwrap();
        assert_eq!(request.quiz_category.id.as_u64(), 3);
        assert!(request.previous_question_ids.is_empty());
    }

    #[test]
    fn test_quiz_category_id_rejects_junk() {
        let junk = r#"{"quizCategory": {"id": "science"}}"#;
        assert!(serde_json::from_str::<QuizRequest>(junk).is_err());

        let negative = r#"{"quizCategory": {"id": -2}}"#;
        assert!(serde_json::from_str::<QuizRequest>(negative).is_err());

        let absent = r#"{"previousQuestionIds": []}"#;
        assert!(serde_json::from_str::<QuizRequest>(absent).is_err());
    }

    #[test]
    fn test_quiz_response_null_when_exhausted() {
        let json = serde_json::to_string(&QuizResponse { question: None }).unwrap();
        assert_eq!(json, r#"{"question":null}"#);
    }
}
