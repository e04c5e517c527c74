use axum::extract::{Json, Query, State};
use serde::Deserialize;

use crate::{
    data::models::{ApiError, RankingBoardEntry},
    data::repositories::WeeklyRankingRepository,
    features::ranking::WeeklyLabel,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RankingQuery {
    pub label: Option<String>, // e.g. "5월 2째주 1등"
}

/// Current champion board, best rank first. `label` narrows it to the
/// entry holding that placing.
pub async fn list_rankings(
    State(state): State<AppState>,
    Query(query): Query<RankingQuery>,
) -> Result<Json<Vec<RankingBoardEntry>>, ApiError> {
    let wanted = query
        .label
        .as_deref()
        .map(str::parse::<WeeklyLabel>)
        .transpose()
        .map_err(ApiError::Validation)?;

    let mut conn = state.pool.get()?;
    let board = WeeklyRankingRepository::list_all(&mut conn)?
        .iter()
        .filter(|entry| wanted.is_none_or(|label| entry.label() == label))
        .map(RankingBoardEntry::from)
        .collect();
    Ok(Json(board))
}
