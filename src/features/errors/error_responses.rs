use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::data::models::{ApiError, AuthError};

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::UserNotFound
            | ApiError::InterviewNotFound
            | ApiError::CommentNotFound
            | ApiError::ScrapNotFound => StatusCode::NOT_FOUND,
            ApiError::AlreadyScrapped => StatusCode::CONFLICT,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::FailedToDeleteInterview
            | ApiError::DatabaseError(_)
            | ApiError::PoolError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::DatabaseError(e) => {
                log::error!("Database error: {}", e);
                "Internal server error".to_string()
            }
            ApiError::PoolError(e) => {
                log::error!("Failed to get DB connection: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AuthError::EmailTaken => (StatusCode::CONFLICT, self.to_string()),
            AuthError::Validation(e) => (StatusCode::BAD_REQUEST, e),
            AuthError::DatabaseError(e) => {
                log::error!("Database error during authentication: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AuthError::HashingError(e) => {
                log::error!("Password hashing failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AuthError::SessionError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e),
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
