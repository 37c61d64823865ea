//! SQL Persistence - telepules / naplo 表的仓储实现
//!
//! 表结构由外部数据库维护，本服务不建表、不迁移

mod database;
mod quake_log_repo;
mod settlement_repo;

pub use database::*;
pub use quake_log_repo::*;
pub use settlement_repo::*;
