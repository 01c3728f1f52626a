use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The four failure kinds the API exposes. Every handler failure is mapped to
/// one of these before it crosses the handler boundary; callers never see a
/// raw engine error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    BadRequest,
    ResourceNotFound,
    UnprocessableEntity,
    InternalError,
}

/// Canonical JSON error envelope
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: &'static str,
    status_code: u16,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound => StatusCode::NOT_FOUND,
            ApiError::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest => "Bad Request",
            ApiError::ResourceNotFound => "Resource Not Found",
            ApiError::UnprocessableEntity => "Unprocessable Entity",
            ApiError::InternalError => "Internal Error",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiError({}, {})", self.status().as_u16(), self.message())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = axum::Json(ErrorBody {
            success: false,
            message: self.message(),
            status_code: self.status().as_u16(),
        });
        (self.status(), body).into_response()
    }
}
