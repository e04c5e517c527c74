use bcrypt::BcryptError;
use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::features::ranking::RankingPeriod;

// Errors surfaced through the HTTP API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not logged in")]
    Unauthorized,
    #[error("User not found")]
    UserNotFound,
    #[error("Interview not found")]
    InterviewNotFound,
    #[error("Comment not found")]
    CommentNotFound,
    #[error("Scrap not found")]
    ScrapNotFound,
    #[error("Interview already scrapped")]
    AlreadyScrapped,
    #[error("Not allowed to {0}")]
    Forbidden(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error("Failed to delete interview")]
    FailedToDeleteInterview,
    #[error("Database error")]
    DatabaseError(DieselError),
    #[error("Pool error: {0}")]
    PoolError(String),
}

// Login, registration and session errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Email already registered")]
    EmailTaken,
    #[error("{0}")]
    Validation(String),
    #[error("Database error")]
    DatabaseError(#[from] DieselError),
    #[error("Hashing error")]
    HashingError(#[from] BcryptError),
    #[error("Session error: {0}")]
    SessionError(String),
}

// Errors raised while maintaining the weekly ranking
#[derive(Error, Debug)]
pub enum RankingError {
    #[error("No ranking entry at {period} rank {expected_rank} while re-ranking after interview {interview_id}")]
    InconsistentRankingState {
        interview_id: i32,
        period: RankingPeriod,
        expected_rank: u32,
    },
    #[error("Period {0} has no calendar window")]
    InvalidPeriod(RankingPeriod),
    #[error("No completed week before {0}")]
    NoCompletedWeek(chrono::NaiveDate),
    #[error("Interview {0} referenced by the ranking is missing")]
    MissingInterview(i32),
    #[error("Database error: {0}")]
    DatabaseError(#[from] DieselError),
    #[error("Pool error: {0}")]
    PoolError(#[from] r2d2::Error),
}
