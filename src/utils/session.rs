use tower_sessions::Session;

use crate::data::models::ApiError;

pub async fn set_user_session(
    session: &Session,
    user_id: i32,
    email: &str,
) -> Result<(), tower_sessions::session::Error> {
    session.insert("logged_in", true).await?;
    session.insert("user_id", user_id).await?;
    session.insert("user_email", email).await?;
    Ok(())
}

pub async fn get_current_user_id(session: &Session) -> Option<i32> {
    match session.get::<i32>("user_id").await {
        Ok(Some(user_id)) => Some(user_id),
        Ok(None) => None,
        Err(e) => {
            log::error!("Failed to get user_id from session: {}", e);
            None
        }
    }
}

pub async fn require_user(session: &Session) -> Result<i32, ApiError> {
    get_current_user_id(session).await.ok_or(ApiError::Unauthorized)
}
