//! Persistence Layer - 数据持久化
//!
//! 基于 sqlx Any 连接池的 SQL 实现（MariaDB/MySQL，或 SQLite）

pub mod sql;

pub use self::sql::{SqlDatabaseHealth, SqlQuakeLogRepository, SqlSettlementRepository};
