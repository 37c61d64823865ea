//! Application State
//!
//! 启动时注入的端口实现、API Key 以及所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateSettlementHandler, DeleteSettlementHandler, UpdateSettlementHandler,
    // Query handlers
    CheckDatabaseHealthHandler, CountQuakesByCountyHandler, GetMaxMagnitudeEntriesHandler,
    ListSettlementNamesByCountyHandler, ListSettlementsHandler,
    // Ports
    DatabaseHealthPort, QuakeLogRepositoryPort, SettlementRepositoryPort,
};

/// 应用状态
pub struct AppState {
    /// 写接口 / 管理接口共享的密钥
    pub api_key: String,

    // ========== Command Handlers ==========
    pub create_settlement_handler: CreateSettlementHandler,
    pub update_settlement_handler: UpdateSettlementHandler,
    pub delete_settlement_handler: DeleteSettlementHandler,

    // ========== Query Handlers ==========
    pub list_settlements_handler: ListSettlementsHandler,
    pub list_names_by_county_handler: ListSettlementNamesByCountyHandler,
    pub count_quakes_by_county_handler: CountQuakesByCountyHandler,
    pub max_magnitude_handler: GetMaxMagnitudeEntriesHandler,
    pub health_handler: CheckDatabaseHealthHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        settlement_repo: Arc<dyn SettlementRepositoryPort>,
        quake_log_repo: Arc<dyn QuakeLogRepositoryPort>,
        health: Arc<dyn DatabaseHealthPort>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),

            // Command handlers
            create_settlement_handler: CreateSettlementHandler::new(settlement_repo.clone()),
            update_settlement_handler: UpdateSettlementHandler::new(settlement_repo.clone()),
            delete_settlement_handler: DeleteSettlementHandler::new(settlement_repo.clone()),

            // Query handlers
            list_settlements_handler: ListSettlementsHandler::new(settlement_repo.clone()),
            list_names_by_county_handler: ListSettlementNamesByCountyHandler::new(settlement_repo),
            count_quakes_by_county_handler: CountQuakesByCountyHandler::new(quake_log_repo.clone()),
            max_magnitude_handler: GetMaxMagnitudeEntriesHandler::new(quake_log_repo),
            health_handler: CheckDatabaseHealthHandler::new(health),
        }
    }
}
