//! Report HTTP Handlers - naplo 统计

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{CountQuakesByCounty, GetMaxMagnitudeEntries};
use crate::infrastructure::http::dto::{CountyCountResponse, MaxMagnitudeResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 按州统计地震次数（次数降序，州名升序）
pub async fn county_quake_counts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CountyCountResponse>>, ApiError> {
    let counts = state
        .count_quakes_by_county_handler
        .handle(CountQuakesByCounty)
        .await?;
    Ok(Json(counts.into_iter().map(CountyCountResponse::from).collect()))
}

/// 最大震级的全部日志行；日志为空时 404
pub async fn max_magnitude_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MaxMagnitudeResponse>>, ApiError> {
    let entries = state
        .max_magnitude_handler
        .handle(GetMaxMagnitudeEntries)
        .await?;
    Ok(Json(entries.into_iter().map(MaxMagnitudeResponse::from).collect()))
}
