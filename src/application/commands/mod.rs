//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：telepules 的增、改、删

mod settlement_commands;

pub mod handlers;

pub use handlers::{CreateSettlementResponse, UpdateSettlementResponse};
pub use settlement_commands::*;
