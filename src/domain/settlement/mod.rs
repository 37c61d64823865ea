//! Settlement Context - 定居点限界上下文
//!
//! 职责:
//! - 名称 / 所属州（vármegye）校验
//! - 定居点标识

mod errors;
mod value_objects;

pub use errors::SettlementError;
pub use value_objects::{CountyName, SettlementDraft, SettlementId, SettlementName, SOMOGY};
