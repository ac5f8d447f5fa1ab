use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use tracing::{debug, info};

use crate::db::models::{District, DistrictPayload, DistrictStateName};
use crate::handlers::{IdPath, JsonBody};
use crate::{CovidError, router::AppState};

pub const DISTRICT_ADDED: &str = "District Successfully Added";
pub const DISTRICT_REMOVED: &str = "District Removed";
pub const DISTRICT_UPDATED: &str = "District Details Updated";

/// POST /districts/
pub async fn create_district(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): JsonBody<DistrictPayload>,
) -> Result<&'static str, CovidError> {
    let district_name = payload.district_name.clone();
    let id = state.storage.create_district(payload).await?;
    info!(district_id = id, district_name = ?district_name, "district added");
    Ok(DISTRICT_ADDED)
}

/// GET /districts/{district_id}/
pub async fn get_district(
    State(state): State<AppState>,
    WithRejection(Path(district_id), _): IdPath,
) -> Result<Json<District>, CovidError> {
    let district = state.storage.get_district(&district_id).await?;
    Ok(Json(district))
}

/// DELETE /districts/{district_id}/
///
/// Deleting an unknown id still reports success.
pub async fn delete_district(
    State(state): State<AppState>,
    WithRejection(Path(district_id), _): IdPath,
) -> Result<&'static str, CovidError> {
    let removed = state.storage.delete_district(&district_id).await?;
    debug!(district_id = %district_id, removed, "district delete");
    Ok(DISTRICT_REMOVED)
}

/// PUT /districts/{district_id}/
///
/// Full-row overwrite, last writer wins.
pub async fn update_district(
    State(state): State<AppState>,
    WithRejection(Path(district_id), _): IdPath,
    WithRejection(Json(payload), _): JsonBody<DistrictPayload>,
) -> Result<&'static str, CovidError> {
    let updated = state.storage.update_district(&district_id, payload).await?;
    debug!(district_id = %district_id, updated, "district update");
    Ok(DISTRICT_UPDATED)
}

/// GET /districts/{district_id}/details/
pub async fn district_details(
    State(state): State<AppState>,
    WithRejection(Path(district_id), _): IdPath,
) -> Result<Json<DistrictStateName>, CovidError> {
    let name = state.storage.district_state_name(&district_id).await?;
    Ok(Json(name))
}
