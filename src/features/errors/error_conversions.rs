use diesel::result::Error as DieselError;
use validator::ValidationErrors;

use crate::data::models::{ApiError, AuthError};

impl From<DieselError> for ApiError {
    fn from(err: DieselError) -> Self {
        ApiError::DatabaseError(err)
    }
}

impl From<r2d2::Error> for ApiError {
    fn from(err: r2d2::Error) -> Self {
        ApiError::PoolError(err.to_string())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<ValidationErrors> for AuthError {
    fn from(err: ValidationErrors) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<r2d2::Error> for AuthError {
    fn from(err: r2d2::Error) -> Self {
        log::error!("Failed to get DB connection: {}", err);
        AuthError::SessionError("Failed to get DB connection".into())
    }
}

impl From<tower_sessions::session::Error> for AuthError {
    fn from(err: tower_sessions::session::Error) -> Self {
        log::error!("Session store error: {}", err);
        AuthError::SessionError("Failed to update user session".into())
    }
}
