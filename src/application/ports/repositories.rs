//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（sqlx Any 连接池 / 内存实现）
//!
//! 每个方法对应一条参数化 SQL 语句，不做缓存、不做重试

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{CountyName, SettlementId, SettlementName};

/// Repository 错误
///
/// Display 只输出底层原始信息，HTTP 层原样返回给调用方
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    DatabaseError(String),
}

// ============================================================================
// Settlement Repository
// ============================================================================

/// 定居点实体（telepules 行）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementRecord {
    pub id: SettlementId,
    pub name: String,
    pub county: String,
}

/// Settlement Repository Port
#[async_trait]
pub trait SettlementRepositoryPort: Send + Sync {
    /// 获取所有定居点，按名称升序
    async fn find_all(&self) -> Result<Vec<SettlementRecord>, RepositoryError>;

    /// 插入定居点，返回数据库生成的 id
    async fn insert(
        &self,
        name: &SettlementName,
        county: &CountyName,
    ) -> Result<SettlementId, RepositoryError>;

    /// 全量更新名称和州，返回受影响行数（0 或 1）
    async fn update(
        &self,
        id: SettlementId,
        name: &SettlementName,
        county: &CountyName,
    ) -> Result<u64, RepositoryError>;

    /// 删除定居点，返回受影响行数
    async fn delete(&self, id: SettlementId) -> Result<u64, RepositoryError>;

    /// 指定州内的定居点名称，按名称升序（精确匹配，大小写取决于数据库排序规则）
    async fn find_names_by_county(&self, county: &CountyName)
        -> Result<Vec<String>, RepositoryError>;
}

// ============================================================================
// Quake Log Repository
// ============================================================================

/// 按州统计的地震次数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyQuakeCount {
    pub county: String,
    pub count: i64,
}

/// 最大震级日志行，连同所属定居点名称
#[derive(Debug, Clone, PartialEq)]
pub struct MaxMagnitudeRecord {
    pub settlement_name: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM:SS
    pub time: String,
    pub magnitude: f64,
}

/// Quake Log Repository Port（naplo 只读）
#[async_trait]
pub trait QuakeLogRepositoryPort: Send + Sync {
    /// 每个至少有一条日志的州的地震次数，按次数降序、州名升序
    async fn count_by_county(&self) -> Result<Vec<CountyQuakeCount>, RepositoryError>;

    /// 所有震级等于当前全局最大值的日志行，按日期、时间降序
    async fn find_max_magnitude(&self) -> Result<Vec<MaxMagnitudeRecord>, RepositoryError>;
}
