//! Route handlers.
//!
//! Each handler is a thin translation: extract and convert the wire
//! payload, run one use case, convert the output back. Domain errors
//! pass through `?` into [`ApiError`] and the single status mapping.

use crate::http::dto::{
    CategoriesResponse, CategoryQuestionsResponse, CreateQuestionRequest, CreateResponse,
    DeleteResponse, QuestionDto, QuestionListResponse, QuizRequest, QuizResponse, SearchRequest,
    SearchResponse, question_dtos,
};
use crate::http::error::{ApiError, ApiJson};
use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;
use trivia_application::{
    CategoryStore, CreateQuestionUseCase, DeleteQuestionUseCase, ListCategoriesUseCase,
    ListQuestionsUseCase, NextQuestionInput, NextQuestionUseCase, QuestionStore,
    QuestionsByCategoryUseCase, SearchQuestionsUseCase,
};
use trivia_domain::{CategoryId, Page, QuestionDraft, QuestionId, QuizOutcome, QuizScope};

/// Shared handler dependencies: the two store ports.
#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<dyn QuestionStore>,
    pub categories: Arc<dyn CategoryStore>,
}

impl AppState {
    pub fn new(questions: Arc<dyn QuestionStore>, categories: Arc<dyn CategoryStore>) -> Self {
        Self {
            questions,
            categories,
        }
    }
}

/// Query string of `GET /questions`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
}

/// `GET /categories`
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let listing = ListCategoriesUseCase::new(state.categories.clone())
        .execute()
        .await?;
    Ok(Json(CategoriesResponse {
        categories: listing.categories,
    }))
}

/// `GET /questions?page=N`
pub async fn get_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = Page::from_query(params.page);
    let out = ListQuestionsUseCase::new(state.questions.clone(), state.categories.clone())
        .execute(page)
        .await?;
    Ok(Json(QuestionListResponse {
        questions: question_dtos(out.questions),
        total_questions: out.total_questions,
        categories: out.categories,
    }))
}

/// `POST /questions`
pub async fn create_question(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateQuestionRequest>,
) -> Result<Json<CreateResponse>, ApiError> {
    let draft = QuestionDraft::new(
        body.question_text,
        body.answer_text,
        CategoryId::new(body.category_id),
        body.difficulty,
    )?;
    let question = CreateQuestionUseCase::new(state.questions.clone())
        .execute(draft)
        .await?;
    Ok(Json(CreateResponse {
        question: QuestionDto::from(question),
    }))
}

/// `DELETE /questions/{id}`
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = DeleteQuestionUseCase::new(state.questions.clone())
        .execute(QuestionId::new(id))
        .await?;
    Ok(Json(DeleteResponse {
        deleted: deleted.as_u64(),
    }))
}

/// `POST /search`
pub async fn search_questions(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = SearchQuestionsUseCase::new(state.questions.clone())
        .execute(&body.search_term)
        .await?;
    Ok(Json(SearchResponse {
        questions: question_dtos(results.questions),
        total_questions: results.total_questions,
    }))
}

/// `GET /categories/{id}/questions`
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<u64>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let out = QuestionsByCategoryUseCase::new(state.questions.clone())
        .execute(CategoryId::new(category_id))
        .await?;
    Ok(Json(CategoryQuestionsResponse {
        questions: question_dtos(out.questions),
        total_questions: out.total_questions,
        current_category: out.category_id.as_u64(),
    }))
}

/// `POST /quizzes`
pub async fn play_quiz(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let scope = QuizScope::from_category_id(CategoryId::new(body.quiz_category.id.as_u64()));
    let previous: Vec<QuestionId> = body
        .previous_question_ids
        .into_iter()
        .map(QuestionId::new)
        .collect();
    debug!(?scope, excluded = previous.len(), "quiz draw requested");

    let outcome = NextQuestionUseCase::new(state.questions.clone())
        .execute(NextQuestionInput::new(previous, scope))
        .await?;
    let question = match outcome {
        QuizOutcome::Next(question) => Some(QuestionDto::from(question)),
        QuizOutcome::Exhausted => None,
    };
    Ok(Json(QuizResponse { question }))
}
