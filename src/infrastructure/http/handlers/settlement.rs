//! Settlement HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{
    CreateSettlement, DeleteSettlement, ListSettlementNamesByCounty, ListSettlements,
    UpdateSettlement,
};
use crate::domain::{CountyName, SettlementError, SettlementId};
use crate::infrastructure::http::dto::{
    SettlementDeletedResponse, SettlementRequest, SettlementResponse, SettlementUpdatedResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取定居点列表（按名称升序）
pub async fn list_settlements(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SettlementResponse>>, ApiError> {
    let result = state.list_settlements_handler.handle(ListSettlements).await?;
    Ok(Json(result.into_iter().map(SettlementResponse::from).collect()))
}

/// 创建定居点
pub async fn create_settlement(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SettlementResponse>), ApiError> {
    let Json(req) = payload?;

    let command = CreateSettlement {
        name: req.nev,
        county: req.varmegye,
    };
    let created = state.create_settlement_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(SettlementResponse::from(created))))
}

/// 全量更新定居点
///
/// 先校验路径 id，再校验请求体，均在访问数据库之前
pub async fn update_settlement(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Result<Json<SettlementUpdatedResponse>, ApiError> {
    let id: SettlementId = raw_id.parse()?;
    let Json(req) = payload?;

    let command = UpdateSettlement {
        id,
        name: req.nev,
        county: req.varmegye,
    };
    let updated = state.update_settlement_handler.handle(command).await?;

    Ok(Json(SettlementUpdatedResponse::from(updated)))
}

/// 删除定居点
pub async fn delete_settlement(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<SettlementDeletedResponse>, ApiError> {
    let id: SettlementId = raw_id.parse()?;

    let deleted = state
        .delete_settlement_handler
        .handle(DeleteSettlement { id })
        .await?;

    Ok(Json(SettlementDeletedResponse {
        ok: true,
        id: deleted.value(),
    }))
}

/// Somogy 州的定居点名称（只返回名称字符串）
pub async fn list_somogy_settlements(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let query = ListSettlementNamesByCounty {
        county: CountyName::somogy(),
    };
    let names = state.list_names_by_county_handler.handle(query).await?;
    Ok(Json(names))
}

/// `somogy` 路径段上的 PUT / DELETE：与其他非数字 id 一样返回 400
pub async fn reject_somogy_id() -> ApiError {
    ApiError::from(SettlementError::InvalidId("somogy".to_string()))
}
