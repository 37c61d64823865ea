//! Settlement Commands

use crate::domain::SettlementId;

/// 创建定居点命令
///
/// 字段保持请求原样（可能缺失或为空），由 handler 校验
#[derive(Debug, Clone)]
pub struct CreateSettlement {
    pub name: Option<String>,
    pub county: Option<String>,
}

/// 全量更新定居点命令
#[derive(Debug, Clone)]
pub struct UpdateSettlement {
    pub id: SettlementId,
    pub name: Option<String>,
    pub county: Option<String>,
}

/// 删除定居点命令
#[derive(Debug, Clone)]
pub struct DeleteSettlement {
    pub id: SettlementId,
}
