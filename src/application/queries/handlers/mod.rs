//! Query Handlers 实现

mod report_handlers;
mod settlement_handlers;

pub use report_handlers::*;
pub use settlement_handlers::*;
