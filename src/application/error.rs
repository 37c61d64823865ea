//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::SettlementError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到（消息直接面向调用方）
    #[error("{0}")]
    NotFound(String),

    /// 验证错误
    #[error("{0}")]
    ValidationError(String),

    /// 仓储错误，保留底层驱动的原始信息
    #[error("{0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// update / delete 目标不存在
    pub fn settlement_not_found() -> Self {
        Self::NotFound("nincs ilyen telepules".to_string())
    }

    /// naplo 表为空
    pub fn no_log_data() -> Self {
        Self::NotFound("nincs naplo adat".to_string())
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<SettlementError> for ApplicationError {
    fn from(err: SettlementError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
