//! Memory Layer - In-Memory Adapters
//!
//! 端口的内存实现：本地演示和测试中替代真实数据库

mod health;
mod quake_log_repo;
mod settlement_repo;

pub use health::InMemoryDatabaseHealth;
pub use quake_log_repo::InMemoryQuakeLogRepository;
pub use settlement_repo::InMemorySettlementRepository;
