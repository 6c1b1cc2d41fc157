//! HTTP API surface.
//!
//! A JSON-over-HTTP view of the catalog and quiz operations:
//!
//! | Route                        | Operation              |
//! |------------------------------|------------------------|
//! | GET  /categories             | list the taxonomy      |
//! | GET  /questions?page=N       | page through questions |
//! | POST /questions              | create a question      |
//! | DELETE /questions/:id        | delete a question      |
//! | POST /search                 | search question text   |
//! | GET  /categories/:id/questions | one category's questions |
//! | POST /quizzes                | draw the next quiz question |
//!
//! All success bodies are operation-specific JSON with camelCase keys;
//! all failures share the `{"success": false, "error": N, "message": _}`
//! shape produced by [`error::ApiError`].

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::router;
