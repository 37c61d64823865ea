//! Admin Handler

use axum::Json;

use crate::infrastructure::http::dto::AdminPingResponse;

/// 只用于确认 API Key 有效
pub async fn admin_ping() -> Json<AdminPingResponse> {
    Json(AdminPingResponse {
        ok: true,
        message: "API key accepted",
    })
}
