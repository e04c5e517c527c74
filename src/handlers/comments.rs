use axum::extract::{Json, Path, State};

use crate::{
    data::models::{
        ApiError, CommentBody, CommentResponse, CreateCommentRequest, UpdateCommentRequest,
    },
    features::comment::CommentService,
    handlers::ApiResponse,
    state::AppState,
    utils,
};

pub async fn list_comments(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Path(interview_id): Path<i32>,
) -> Result<Json<Vec<CommentBody>>, ApiError> {
    let viewer_id = utils::get_current_user_id(&session).await;
    let mut conn = state.pool.get()?;

    let comments = CommentService::new(&mut conn, state.storage.as_ref()).list(interview_id, viewer_id)?;
    Ok(Json(comments))
}

pub async fn create_comment(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Path(interview_id): Path<i32>,
    Json(payload): Json<CreateCommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    let user_id = utils::require_user(&session).await?;
    let mut conn = state.pool.get()?;

    let comment = CommentService::new(&mut conn, state.storage.as_ref())
        .create(user_id, interview_id, &payload)?;
    Ok(Json(comment))
}

pub async fn update_comment(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Path(comment_id): Path<i32>,
    Json(payload): Json<UpdateCommentRequest>,
) -> Result<Json<CommentResponse>, ApiError> {
    let user_id = utils::require_user(&session).await?;
    let mut conn = state.pool.get()?;

    let comment = CommentService::new(&mut conn, state.storage.as_ref())
        .update(user_id, comment_id, &payload)?;
    Ok(Json(comment))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Path(comment_id): Path<i32>,
) -> Result<Json<ApiResponse>, ApiError> {
    let user_id = utils::require_user(&session).await?;
    let mut conn = state.pool.get()?;

    CommentService::new(&mut conn, state.storage.as_ref()).delete(user_id, comment_id)?;

    Ok(Json(ApiResponse {
        success: true,
        message: "Comment deleted successfully".to_string(),
    }))
}
