//! Command Handlers 实现

mod settlement_handlers;

pub use settlement_handlers::*;
