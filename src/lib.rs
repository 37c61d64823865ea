//! Quakelog - 定居点与地震日志 HTTP 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Settlement Context: 定居点名称、所属州校验
//!
//! 应用层 (application/):
//! - Ports: SettlementRepository, QuakeLogRepository, DatabaseHealth
//! - Commands: 定居点增改删
//! - Queries: 列表、报表、健康检查
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: JSON API + API Key 中间件
//! - Persistence: sqlx Any 连接池（MariaDB/MySQL，或 SQLite）
//! - Memory: 端口的内存实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
