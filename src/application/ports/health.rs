//! Database Health Port

use async_trait::async_trait;

use super::RepositoryError;

/// 数据库探活端口
#[async_trait]
pub trait DatabaseHealthPort: Send + Sync {
    /// 执行一次最简单的查询（SELECT 1）
    async fn ping(&self) -> Result<(), RepositoryError>;
}
