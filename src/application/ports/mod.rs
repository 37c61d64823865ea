//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod health;
mod repositories;

pub use health::DatabaseHealthPort;
pub use repositories::{
    CountyQuakeCount, MaxMagnitudeRecord, QuakeLogRepositoryPort, RepositoryError,
    SettlementRecord, SettlementRepositoryPort,
};
