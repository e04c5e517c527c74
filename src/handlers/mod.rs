pub mod auth;
pub mod comments;
pub mod interviews;
pub mod rankings;
pub mod scraps;
pub mod users;

use serde::Serialize;

/// Standard API response format
#[derive(Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}
