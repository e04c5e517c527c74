use axum::extract::{Json, State};

use crate::{
    data::models::{ApiError, UpdateProfileRequest, UserBody},
    features::user::ProfileService,
    state::AppState,
    utils,
};

pub async fn get_me(
    State(state): State<AppState>,
    session: tower_sessions::Session,
) -> Result<Json<UserBody>, ApiError> {
    let user_id = utils::require_user(&session).await?;
    let mut conn = state.pool.get()?;

    Ok(Json(ProfileService::new(&mut conn, state.storage.as_ref()).me(user_id)?))
}

pub async fn update_me(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UserBody>, ApiError> {
    let user_id = utils::require_user(&session).await?;
    let mut conn = state.pool.get()?;

    let body = ProfileService::new(&mut conn, state.storage.as_ref()).update(user_id, &payload)?;
    Ok(Json(body))
}
