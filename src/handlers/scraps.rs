use axum::extract::{Json, Path, State};

use crate::{
    data::models::{ApiError, ScrapResponse},
    features::scrap::ScrapService,
    state::AppState,
    utils,
};

pub async fn add_scrap(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Path(interview_id): Path<i32>,
) -> Result<Json<ScrapResponse>, ApiError> {
    let user_id = utils::require_user(&session).await?;
    let mut conn = state.pool.get()?;

    Ok(Json(ScrapService::new(&mut conn).add(user_id, interview_id)?))
}

pub async fn remove_scrap(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Path(interview_id): Path<i32>,
) -> Result<Json<ScrapResponse>, ApiError> {
    let user_id = utils::require_user(&session).await?;
    let mut conn = state.pool.get()?;

    Ok(Json(ScrapService::new(&mut conn).remove(user_id, interview_id)?))
}
