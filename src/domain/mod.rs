//! Domain Layer - 领域层
//!
//! Settlement Context: település（定居点）名称 / 所属州校验与标识。
//! 地震日志（naplo）对本服务只读，没有领域行为，只在应用层以报表记录出现。

pub mod settlement;

pub use settlement::{
    CountyName, SettlementDraft, SettlementError, SettlementId, SettlementName, SOMOGY,
};
