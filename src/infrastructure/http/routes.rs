//! HTTP Routes
//!
//! API Endpoints:
//! - /health                  GET     数据库探活
//! - /telepulesek             GET     定居点列表（按名称）
//! - /telepulesek             POST    创建定居点            [X-API-Key]
//! - /telepulesek/{id}        PUT     全量更新定居点        [X-API-Key]
//! - /telepulesek/{id}        DELETE  删除定居点            [X-API-Key]
//! - /telepulesek/somogy      GET     Somogy 州的定居点名称
//! - /telepulesek/somogy      PUT/DELETE  400 hibás id       [X-API-Key]
//! - /statisztika/varmegye    GET     按州统计地震次数
//! - /naplo/maxmagnitudo      GET     最大震级的日志行
//! - /admin/ping              POST    校验 API Key          [X-API-Key]

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::middleware::require_api_key;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state))
}

/// 公开的只读路由
fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/telepulesek", get(handlers::list_settlements))
        .route("/telepulesek/somogy", get(handlers::list_somogy_settlements))
        .route("/statisztika/varmegye", get(handlers::county_quake_counts))
        .route("/naplo/maxmagnitudo", get(handlers::max_magnitude_entries))
}

/// 需要 API Key 的写路由和管理路由
fn protected_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/telepulesek", post(handlers::create_settlement))
        .route(
            "/telepulesek/:id",
            put(handlers::update_settlement).delete(handlers::delete_settlement),
        )
        // 静态路由优先于 :id，这里补上写方法，按非法 id 处理
        .route(
            "/telepulesek/somogy",
            put(handlers::reject_somogy_id).delete(handlers::reject_somogy_id),
        )
        .route("/admin/ping", post(handlers::admin_ping))
        .route_layer(middleware::from_fn_with_state(state, require_api_key))
}
