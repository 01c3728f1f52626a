//! API routes configuration module

use crate::api::handlers::{
    delete_question, get_categories, get_questions, get_questions_by_category, play_quiz,
    search_questions, submit_question,
};
use crate::db::Database;
use axum::http::{header, Method};
use axum::{
    routing::{delete, get, post},
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates and configures the API router with all routes
///
/// # Arguments
/// * `database` - Database connection pool to be shared across handlers
///
/// # Returns
/// * `Router` - Configured router with all API endpoints, CORS and HTTP tracing
pub fn app(database: Database) -> Router {
    // All origins; the header and method lists are part of the API contract.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/categories", get(get_categories))
        .route(
            "/categories/:category_id/questions",
            get(get_questions_by_category),
        )
        .route("/questions", get(get_questions).post(submit_question))
        .route("/questions/:question_id", delete(delete_question))
        .route("/questions/search", post(search_questions))
        .route("/quizzes", post(play_quiz))
        .layer(Extension(database))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
