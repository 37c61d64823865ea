//! Health Handler

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::application::CheckDatabaseHealth;
use crate::infrastructure::http::dto::HealthResponse;
use crate::infrastructure::http::state::AppState;

/// 健康检查 - 对数据库执行 SELECT 1
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    match state.health_handler.handle(CheckDatabaseHealth).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                ok: true,
                db: "up",
                error: None,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    ok: false,
                    db: "down",
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
