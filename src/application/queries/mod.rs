//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：定居点列表、报表、数据库健康检查

mod report_queries;
mod settlement_queries;

pub mod handlers;

pub use report_queries::*;
pub use settlement_queries::*;
