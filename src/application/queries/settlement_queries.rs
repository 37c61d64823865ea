//! Settlement Queries

use crate::domain::CountyName;

/// 列出所有定居点（按名称排序）
#[derive(Debug, Clone)]
pub struct ListSettlements;

/// 列出某个州内的定居点名称
#[derive(Debug, Clone)]
pub struct ListSettlementNamesByCounty {
    pub county: CountyName,
}
