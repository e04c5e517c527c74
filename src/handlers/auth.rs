use axum::extract::{Json, State};

use crate::{
    data::models::{AuthError, LoginRequest, RegisterRequest},
    features::auth::AuthService,
    handlers::ApiResponse,
    state::AppState,
    utils::set_user_session,
};

pub async fn register(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<ApiResponse>, AuthError> {
    let mut conn = state.pool.get()?;
    let user = AuthService::new(&mut conn, state.bcrypt_cost).register(&payload)?;

    set_user_session(&session, user.user_id, &user.email).await?;

    Ok(Json(ApiResponse {
        success: true,
        message: "Registered successfully".to_string(),
    }))
}

pub async fn login(
    State(state): State<AppState>,
    session: tower_sessions::Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse>, AuthError> {
    let mut conn = state.pool.get()?;
    let user = AuthService::new(&mut conn, state.bcrypt_cost).login(&payload)?;

    // Fresh session id on privilege change
    session.cycle_id().await?;
    set_user_session(&session, user.user_id, &user.email).await?;
    log::info!("User {} logged in", user.user_id);

    Ok(Json(ApiResponse {
        success: true,
        message: "Logged in successfully".to_string(),
    }))
}

pub async fn logout(session: tower_sessions::Session) -> Result<Json<ApiResponse>, AuthError> {
    session.delete().await?;

    Ok(Json(ApiResponse {
        success: true,
        message: "Logged out".to_string(),
    }))
}
