use crate::api::errors::ApiError;
use crate::constants::QUESTIONS_PER_PAGE;
/// Database and repository imports
use crate::db::Database;
use crate::db::{Category, NewQuestion, Question, TriviaRepository};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, Query};
use axum::Json;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// Query parameters accepted by the paginated question listing
#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

/// Represents the request payload for submitting a new question. Every field
/// is optional at the parsing stage so that a missing field maps to a 400
/// rather than a deserialization rejection.
#[derive(Deserialize)]
pub struct SubmitQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

/// Represents the request payload for searching questions
#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<i32>,
}

/// Represents the request payload for playing a quiz round
#[derive(Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategory>,
}

/// Category selector inside a quiz request; extra fields (e.g. `type`) are
/// accepted and ignored
#[derive(Deserialize)]
pub struct QuizCategory {
    pub id: Option<i32>,
}

/// Response payload listing all categories as an id -> type map
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i32, String>,
    pub total_categories: usize,
}

/// Response payload for the paginated question listing
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<i32, String>,
    pub current_category: Option<i32>,
}

/// Response payload for question search
#[derive(Serialize)]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i32>,
}

/// Response payload for the by-category question listing
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i32,
}

/// Response payload for a quiz round; `question` is null once the category
/// has been exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// Minimal acknowledgement returned by create and delete
#[derive(Serialize)]
pub struct StatusResponse {
    pub success: bool,
}

fn category_map(categories: &[Category]) -> BTreeMap<i32, String> {
    categories
        .iter()
        .map(|c| (c.id, c.type_.clone()))
        .collect()
}

/// Lists all categories as an id -> type map
///
/// # Returns
///
/// * `Result<Json<CategoriesResponse>, ApiError>` - 404 when no categories
///   exist, 500 when the store fails
#[axum::debug_handler]
pub async fn get_categories(
    Extension(database): Extension<Database>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let mut conn = database.get_conn().map_err(|_| ApiError::InternalError)?;
    let mut repo = TriviaRepository::new(&mut conn);

    let categories = repo
        .list_categories()
        .map_err(|_| ApiError::InternalError)?;

    if categories.is_empty() {
        return Err(ApiError::ResourceNotFound);
    }

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories: category_map(&categories),
    }))
}

/// Lists questions ten at a time, ordered by ascending id.
///
/// `page` is 1-indexed and defaults to 1; a non-integer value falls back to
/// the default. The slice is taken in memory from the full ordered list, and
/// an empty slice (page past the end, or page < 1) is a 404.
#[axum::debug_handler]
pub async fn get_questions(
    Extension(database): Extension<Database>,
    query: Option<Query<PageQuery>>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = query.and_then(|q| q.page).unwrap_or(1);

    let mut conn = database
        .get_conn()
        .map_err(|_| ApiError::ResourceNotFound)?;
    let mut repo = TriviaRepository::new(&mut conn);

    let questions = repo
        .list_questions(None)
        .map_err(|_| ApiError::ResourceNotFound)?;
    let categories = repo
        .list_categories()
        .map_err(|_| ApiError::ResourceNotFound)?;

    let total_questions = questions.len();
    if page < 1 {
        return Err(ApiError::ResourceNotFound);
    }

    let start = QUESTIONS_PER_PAGE.saturating_mul((page - 1) as usize);
    if start >= total_questions {
        return Err(ApiError::ResourceNotFound);
    }
    let end = (start + QUESTIONS_PER_PAGE).min(total_questions);

    Ok(Json(QuestionListResponse {
        success: true,
        questions: questions[start..end].to_vec(),
        total_questions,
        categories: category_map(&categories),
        current_category: None,
    }))
}

/// Permanently deletes a question by id.
///
/// A non-numeric or unknown id is a 422, matching the contract that a delete
/// of something that does not exist cannot be processed.
#[axum::debug_handler]
pub async fn delete_question(
    Path(question_id): Path<String>,
    Extension(database): Extension<Database>,
) -> Result<Json<StatusResponse>, ApiError> {
    let question_id: i32 = question_id
        .parse()
        .map_err(|_| ApiError::UnprocessableEntity)?;

    let mut conn = database
        .get_conn()
        .map_err(|_| ApiError::UnprocessableEntity)?;
    let mut repo = TriviaRepository::new(&mut conn);

    repo.delete_question(question_id)
        .map_err(|_| ApiError::UnprocessableEntity)?;

    info!("deleted question {}", question_id);
    Ok(Json(StatusResponse { success: true }))
}

/// Creates a new question from a JSON body.
///
/// All four fields are required; a missing field or an unparseable body is a
/// 400, a persistence failure a 422. The referenced category is not checked
/// for existence.
#[axum::debug_handler]
pub async fn submit_question(
    Extension(database): Extension<Database>,
    payload: Result<Json<SubmitQuestionRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::BadRequest)?;

    let (Some(question), Some(answer), Some(category), Some(difficulty)) = (
        payload.question,
        payload.answer,
        payload.category,
        payload.difficulty,
    ) else {
        return Err(ApiError::BadRequest);
    };

    let mut conn = database
        .get_conn()
        .map_err(|_| ApiError::UnprocessableEntity)?;
    let mut repo = TriviaRepository::new(&mut conn);

    let stored = repo
        .insert_question(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
        .map_err(|_| ApiError::UnprocessableEntity)?;

    info!("created question {} in category {}", stored.id, stored.category);
    Ok(Json(StatusResponse { success: true }))
}

/// Searches questions by case-insensitive substring of the question text.
///
/// `searchTerm` is required; `currentCategory` is echoed back untouched.
/// Zero matches is a 404.
#[axum::debug_handler]
pub async fn search_questions(
    Extension(database): Extension<Database>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::BadRequest)?;
    let term = payload.search_term.ok_or(ApiError::BadRequest)?;

    let mut conn = database.get_conn().map_err(|_| ApiError::InternalError)?;
    let mut repo = TriviaRepository::new(&mut conn);

    let questions = repo
        .search_questions(&term)
        .map_err(|_| ApiError::InternalError)?;

    if questions.is_empty() {
        return Err(ApiError::ResourceNotFound);
    }

    Ok(Json(SearchResponse {
        total_questions: questions.len(),
        questions,
        current_category: payload.current_category,
    }))
}

/// Lists all questions belonging to one category.
///
/// Zero matches is a 404, which also covers a non-numeric category id.
#[axum::debug_handler]
pub async fn get_questions_by_category(
    Path(category_id): Path<String>,
    Extension(database): Extension<Database>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category_id: i32 = category_id.parse().map_err(|_| ApiError::ResourceNotFound)?;

    let mut conn = database
        .get_conn()
        .map_err(|_| ApiError::ResourceNotFound)?;
    let mut repo = TriviaRepository::new(&mut conn);

    let questions = repo
        .list_questions(Some(category_id))
        .map_err(|_| ApiError::ResourceNotFound)?;

    if questions.is_empty() {
        return Err(ApiError::ResourceNotFound);
    }

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category_id,
    }))
}

/// Serves one quiz question from the requested category, excluding ids listed
/// in `previous_questions`.
///
/// The survivor is picked uniformly at random; once every question in the
/// category has been asked, `question` is null. The category id is filtered
/// literally, so an id matching no questions simply yields null.
#[axum::debug_handler]
pub async fn play_quiz(
    Extension(database): Extension<Database>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::BadRequest)?;

    let previous_questions = payload.previous_questions.ok_or(ApiError::BadRequest)?;
    let category_id = payload
        .quiz_category
        .and_then(|c| c.id)
        .ok_or(ApiError::BadRequest)?;

    let mut conn = database
        .get_conn()
        .map_err(|_| ApiError::UnprocessableEntity)?;
    let mut repo = TriviaRepository::new(&mut conn);

    let questions = repo
        .list_questions(Some(category_id))
        .map_err(|_| ApiError::UnprocessableEntity)?;

    let remaining: Vec<Question> = questions
        .into_iter()
        .filter(|q| !previous_questions.contains(&q.id))
        .collect();

    let question = remaining.choose(&mut rand::thread_rng()).cloned();

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
