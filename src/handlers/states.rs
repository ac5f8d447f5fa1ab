use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;

use crate::db::models::{State as StateRow, StateStats};
use crate::handlers::IdPath;
use crate::{CovidError, router::AppState};

/// GET /states/
pub async fn list_states(
    State(state): State<AppState>,
) -> Result<Json<Vec<StateRow>>, CovidError> {
    let states = state.storage.list_states().await?;
    Ok(Json(states))
}

/// GET /states/{state_id}/
pub async fn get_state(
    State(state): State<AppState>,
    WithRejection(Path(state_id), _): IdPath,
) -> Result<Json<StateRow>, CovidError> {
    let row = state.storage.get_state(&state_id).await?;
    Ok(Json(row))
}

/// GET /states/{state_id}/stats/
pub async fn state_stats(
    State(state): State<AppState>,
    WithRejection(Path(state_id), _): IdPath,
) -> Result<Json<StateStats>, CovidError> {
    let stats = state.storage.state_stats(&state_id).await?;
    Ok(Json(stats))
}
