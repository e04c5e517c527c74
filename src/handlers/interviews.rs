use axum::extract::{Json, Path, Query, State};

use crate::{
    data::models::{ApiError, InterviewInfo, InterviewList, ListParams, UpdateInterviewRequest},
    features::interview::InterviewService,
    state::AppState,
    utils,
};

pub async fn list_interviews(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Query(params): Query<ListParams>,
) -> Result<Json<InterviewList>, ApiError> {
    let viewer_id = utils::get_current_user_id(&session).await;
    let mut conn = state.pool.get()?;

    let list = InterviewService::new(&mut conn, state.storage.as_ref()).list(viewer_id, &params)?;
    Ok(Json(list))
}

pub async fn get_interview(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Path(interview_id): Path<i32>,
) -> Result<Json<InterviewInfo>, ApiError> {
    let viewer_id = utils::get_current_user_id(&session).await;
    let mut conn = state.pool.get()?;

    let info = InterviewService::new(&mut conn, state.storage.as_ref()).read_one(interview_id, viewer_id)?;
    Ok(Json(info))
}

pub async fn update_interview(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Path(interview_id): Path<i32>,
    Json(payload): Json<UpdateInterviewRequest>,
) -> Result<Json<InterviewInfo>, ApiError> {
    let user_id = utils::require_user(&session).await?;
    let mut conn = state.pool.get()?;

    let info = InterviewService::new(&mut conn, state.storage.as_ref())
        .update(user_id, interview_id, &payload)?;
    Ok(Json(info))
}

pub async fn delete_interview(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Path(interview_id): Path<i32>,
) -> Result<Json<InterviewInfo>, ApiError> {
    let user_id = utils::require_user(&session).await?;
    let mut conn = state.pool.get()?;

    let info = InterviewService::new(&mut conn, state.storage.as_ref()).delete(user_id, interview_id)?;
    Ok(Json(info))
}
