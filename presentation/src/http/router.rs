//! Route table and shared middleware.

use crate::http::handlers::{self, AppState};
use axum::Router;
use axum::extract::Request;
use axum::http::HeaderMap;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    HeaderValue,
};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post};

/// Builds the full route table over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(handlers::get_categories))
        .route(
            "/categories/:id/questions",
            get(handlers::questions_by_category),
        )
        .route(
            "/questions",
            get(handlers::get_questions).post(handlers::create_question),
        )
        .route("/questions/:id", delete(handlers::delete_question))
        .route("/search", post(handlers::search_questions))
        .route("/quizzes", post(handlers::play_quiz))
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

/// Stamps permissive CORS headers on every response, error responses
/// included. The service is meant to sit behind arbitrary frontends.
async fn cors(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    apply_cors_headers(response.headers_mut());
    response
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type,Authorization,true"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,PUT,POST,DELETE,OPTIONS"),
    );
}
