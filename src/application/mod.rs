//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SettlementRepository、QuakeLogRepository、DatabaseHealth）
//! - commands: CQRS 命令及处理器（写 telepules）
//! - queries: CQRS 查询及处理器（列表、报表、健康检查）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    CreateSettlement, CreateSettlementResponse, DeleteSettlement, UpdateSettlement,
    UpdateSettlementResponse,
    // Handlers
    handlers::{CreateSettlementHandler, DeleteSettlementHandler, UpdateSettlementHandler},
};

pub use error::ApplicationError;

pub use ports::{
    CountyQuakeCount, DatabaseHealthPort, MaxMagnitudeRecord, QuakeLogRepositoryPort,
    RepositoryError, SettlementRecord, SettlementRepositoryPort,
};

pub use queries::{
    CheckDatabaseHealth, CountQuakesByCounty, GetMaxMagnitudeEntries, ListSettlementNamesByCounty,
    ListSettlements,
    // Handlers
    handlers::{
        CheckDatabaseHealthHandler, CountQuakesByCountyHandler, GetMaxMagnitudeEntriesHandler,
        ListSettlementNamesByCountyHandler, ListSettlementsHandler,
    },
};
